//! The plan catalog: an ordered, read-only table of subscription tiers.

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::types::{Plan, PlanId};

/// Largest credit allotment a plan may carry.
///
/// Clamped counts never consume more than twice the allotment, so balances
/// stay within `i64`.
pub const MAX_PLAN_CREDITS: u64 = i64::MAX as u64 / 2;

/// Id of the plan a fresh session starts on in the built-in catalog.
pub const DEFAULT_PLAN_ID: &str = "pro";

/// Feature list shared by every built-in tier.
const BUILTIN_FEATURES: &[&str] = &[
    "Total flexibility in how credits are spent",
    "Messages or calls, inbound or outbound",
    "Unused credits roll over",
    "Additional credits available for purchase",
    "Real-time usage control and monitoring",
];

/// (id, name, credits, price, description)
const BUILTIN_PLANS: &[(&str, &str, u64, &str, &str)] = &[
    ("basic", "Basic", 1312, "$50", "Ideal for getting started"),
    ("pro", "Pro", 3415, "$130", "For growing businesses"),
    ("elite", "Elite", 6563, "$250", "Mid-sized operations"),
    ("max", "Max", 13126, "$500", "Maximum performance"),
];

/// Ordered mapping from plan id to [`Plan`], plus the designated default.
///
/// Built once at startup and never mutated. Construction validates the
/// table, so every lookup helper can assume ids are unique and credits are
/// in `1..=MAX_PLAN_CREDITS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<Plan>,
    default_id: PlanId,
}

impl Catalog {
    /// Build a catalog from an ordered list of plans.
    ///
    /// `default_id` falls back to the first plan when `None`.
    pub fn new(plans: Vec<Plan>, default_id: Option<PlanId>) -> Result<Self> {
        let first = plans.first().ok_or(CatalogError::Empty)?;
        let default_id = default_id.unwrap_or_else(|| first.id.clone());

        let mut seen = HashSet::new();
        for plan in &plans {
            if !seen.insert(plan.id.as_str()) {
                return Err(CatalogError::DuplicateId(plan.id.clone()));
            }
            if plan.credits == 0 {
                return Err(CatalogError::ZeroCredits(plan.id.clone()));
            }
            if plan.credits > MAX_PLAN_CREDITS {
                return Err(CatalogError::CreditsTooLarge(plan.id.clone()));
            }
        }
        if !seen.contains(default_id.as_str()) {
            return Err(CatalogError::UnknownDefault(default_id));
        }

        Ok(Self { plans, default_id })
    }

    /// The four built-in tiers, defaulting to [`DEFAULT_PLAN_ID`].
    pub fn builtin() -> Self {
        let plans = BUILTIN_PLANS
            .iter()
            .map(|&(id, name, credits, price, description)| Plan {
                id: id.to_string(),
                name: name.to_string(),
                credits,
                price: price.to_string(),
                description: description.to_string(),
                features: BUILTIN_FEATURES.iter().map(|f| f.to_string()).collect(),
            })
            .collect();
        Self {
            plans,
            default_id: DEFAULT_PLAN_ID.to_string(),
        }
    }

    pub fn get(&self, plan_id: &str) -> Result<&Plan> {
        self.plans
            .iter()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| CatalogError::NotFound(plan_id.to_string()))
    }

    /// `floor(credits / COST_PER_MESSAGE)` for the given plan.
    pub fn max_messages(&self, plan_id: &str) -> Result<u64> {
        Ok(self.get(plan_id)?.max_messages())
    }

    /// `floor(credits / COST_PER_MINUTE)` for the given plan.
    pub fn max_minutes(&self, plan_id: &str) -> Result<u64> {
        Ok(self.get(plan_id)?.max_minutes())
    }

    /// Plans in catalog order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|p| p.id.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn default_plan(&self) -> &Plan {
        // Validated at construction.
        self.plans
            .iter()
            .find(|p| p.id == self.default_id)
            .unwrap_or(&self.plans[0])
    }

    /// Zero-based position of a plan in catalog order.
    pub fn position(&self, plan_id: &str) -> Option<usize> {
        self.plans.iter().position(|p| p.id == plan_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, credits: u64) -> Plan {
        Plan {
            id: id.into(),
            name: id.to_uppercase(),
            credits,
            price: "$0".into(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    #[test]
    fn builtin_order_and_credits() {
        let c = Catalog::builtin();
        let ids: Vec<&str> = c.ids().collect();
        assert_eq!(ids, vec!["basic", "pro", "elite", "max"]);
        let credits: Vec<u64> = c.plans().iter().map(|p| p.credits).collect();
        assert_eq!(credits, vec![1312, 3415, 6563, 13126]);
        assert_eq!(c.default_id(), "pro");
        assert_eq!(c.default_plan().name, "Pro");
        assert!(c.plans().iter().all(|p| p.features.len() == 5));
    }

    #[test]
    fn builtin_passes_validation() {
        let c = Catalog::builtin();
        let rebuilt = Catalog::new(c.plans().to_vec(), Some(c.default_id().to_string())).unwrap();
        assert_eq!(rebuilt, c);
    }

    #[test]
    fn get_unknown_is_not_found() {
        let c = Catalog::builtin();
        let err = c.get("platinum").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "platinum"));
        assert!(c.max_messages("platinum").is_err());
    }

    #[test]
    fn maxima_per_plan() {
        let c = Catalog::builtin();
        assert_eq!(c.max_messages("basic").unwrap(), 1312);
        assert_eq!(c.max_minutes("basic").unwrap(), 131);
        assert_eq!(c.max_messages("pro").unwrap(), 3415);
        assert_eq!(c.max_minutes("pro").unwrap(), 341);
        assert_eq!(c.max_minutes("elite").unwrap(), 656);
        assert_eq!(c.max_minutes("max").unwrap(), 1312);
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(Catalog::new(vec![], None), Err(CatalogError::Empty)));
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = Catalog::new(vec![plan("a", 10), plan("a", 20)], None).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn new_rejects_zero_credits() {
        let err = Catalog::new(vec![plan("a", 10), plan("b", 0)], None).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroCredits(ref id) if id == "b"));
    }

    #[test]
    fn new_rejects_oversized_credits() {
        let err = Catalog::new(vec![plan("a", 10), plan("huge", u64::MAX)], None).unwrap_err();
        assert!(matches!(err, CatalogError::CreditsTooLarge(ref id) if id == "huge"));
        assert!(Catalog::new(vec![plan("edge", MAX_PLAN_CREDITS)], None).is_ok());
        assert!(Catalog::new(vec![plan("over", MAX_PLAN_CREDITS + 1)], None).is_err());
    }

    #[test]
    fn largest_allotment_keeps_balance_exact() {
        let c = Catalog::new(vec![plan("edge", MAX_PLAN_CREDITS)], None).unwrap();
        let p = c.get("edge").unwrap();
        let r = crate::consumption::compute(p, p.max_messages(), p.max_minutes());
        assert_eq!(r.total_consumed, p.max_messages() + p.max_minutes() * 10);
        assert_eq!(
            i128::from(r.remaining),
            i128::from(r.initial_credits) - i128::from(r.total_consumed)
        );
        assert!(r.is_overage());
    }

    #[test]
    fn new_rejects_unknown_default() {
        let err = Catalog::new(vec![plan("a", 10)], Some("z".into())).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDefault(ref id) if id == "z"));
    }

    #[test]
    fn new_defaults_to_first_plan() {
        let c = Catalog::new(vec![plan("a", 10), plan("b", 20)], None).unwrap();
        assert_eq!(c.default_id(), "a");
        assert_eq!(c.position("b"), Some(1));
        assert_eq!(c.len(), 2);
    }
}
