use serde::{Deserialize, Serialize};

use crate::types::{Plan, COST_PER_MESSAGE, COST_PER_MINUTE};

/// Credit usage derived from a plan and the two counts.
///
/// `remaining` keeps its true sign; a negative value is an overage.
/// Use [`display_remaining`](Self::display_remaining) for the zero-floored
/// figure and [`overage`](Self::overage) for the magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumptionResult {
    pub initial_credits: u64,
    pub message_credits: u64,
    pub call_credits: u64,
    pub total_consumed: u64,
    pub remaining: i64,
}

impl ConsumptionResult {
    /// True when consumption exceeds the allotment. Zero remaining is not overage.
    pub fn is_overage(&self) -> bool {
        self.remaining < 0
    }

    /// Credits over the allotment, or 0.
    pub fn overage(&self) -> u64 {
        if self.is_overage() {
            self.remaining.unsigned_abs()
        } else {
            0
        }
    }

    /// Remaining credits floored at zero.
    pub fn display_remaining(&self) -> u64 {
        self.remaining.max(0) as u64
    }
}

/// Compute credit consumption for `messages` and `minutes` on `plan`.
///
/// `plan` must come from a validated [`Catalog`](crate::Catalog) and the
/// counts must be clamped against its maxima; under those bounds every
/// figure, including `remaining`, is exact.
pub fn compute(plan: &Plan, messages: u64, minutes: u64) -> ConsumptionResult {
    let message_credits = messages * COST_PER_MESSAGE;
    let call_credits = minutes * COST_PER_MINUTE;
    let total_consumed = message_credits + call_credits;
    let remaining = plan.credits as i64 - total_consumed as i64;

    ConsumptionResult {
        initial_credits: plan.credits,
        message_credits,
        call_credits,
        total_consumed,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn pro_scenario() {
        let c = Catalog::builtin();
        let r = compute(c.get("pro").unwrap(), 150, 30);
        assert_eq!(r.initial_credits, 3415);
        assert_eq!(r.message_credits, 150);
        assert_eq!(r.call_credits, 300);
        assert_eq!(r.total_consumed, 450);
        assert_eq!(r.remaining, 2965);
        assert!(!r.is_overage());
        assert_eq!(r.overage(), 0);
        assert_eq!(r.display_remaining(), 2965);
    }

    #[test]
    fn basic_overage_scenario() {
        let c = Catalog::builtin();
        let r = compute(c.get("basic").unwrap(), 1312, 100);
        assert_eq!(r.message_credits, 1312);
        assert_eq!(r.call_credits, 1000);
        assert_eq!(r.total_consumed, 2312);
        assert_eq!(r.remaining, -1000);
        assert!(r.is_overage());
        assert_eq!(r.overage(), 1000);
        assert_eq!(r.display_remaining(), 0);
    }

    #[test]
    fn exactly_spent_is_not_overage() {
        let c = Catalog::builtin();
        // 1312 = 312 messages + 100 minutes
        let r = compute(c.get("basic").unwrap(), 312, 100);
        assert_eq!(r.remaining, 0);
        assert!(!r.is_overage());

        let r = compute(c.get("basic").unwrap(), 313, 100);
        assert_eq!(r.remaining, -1);
        assert!(r.is_overage());
        assert_eq!(r.overage(), 1);
    }

    #[test]
    fn invariants_hold_across_plans() {
        let c = Catalog::builtin();
        for plan in c.plans() {
            for messages in [0, 1, plan.max_messages() / 2, plan.max_messages()] {
                for minutes in [0, 1, plan.max_minutes() / 3, plan.max_minutes()] {
                    let r = compute(plan, messages, minutes);
                    assert_eq!(r.total_consumed, messages + minutes * 10);
                    assert_eq!(r.total_consumed, r.message_credits + r.call_credits);
                    assert_eq!(r.remaining, plan.credits as i64 - r.total_consumed as i64);
                    assert_eq!(r.is_overage(), r.remaining < 0);
                }
            }
        }
    }
}
