use serde::Serialize;

use crate::consumption::ConsumptionResult;
use crate::types::{Plan, UsageInput};

/// Everything a rendering surface needs for one frame.
///
/// Figures are copied from the session's [`ConsumptionResult`]; callers
/// should display these rather than recompute them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub plan_id: String,
    pub plan_name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub credits: u64,
    pub max_messages: u64,
    pub max_minutes: u64,
    pub messages: u64,
    pub minutes: u64,
    pub message_credits: u64,
    pub call_credits: u64,
    pub total_consumed: u64,
    /// Signed balance; negative on overage.
    pub remaining: i64,
    /// Balance floored at zero, for display.
    pub display_remaining: u64,
    pub is_overage: bool,
    pub overage: u64,
}

impl Summary {
    pub fn new(plan: &Plan, input: &UsageInput, result: &ConsumptionResult) -> Self {
        Self {
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            price: plan.price.clone(),
            description: plan.description.clone(),
            features: plan.features.clone(),
            credits: result.initial_credits,
            max_messages: plan.max_messages(),
            max_minutes: plan.max_minutes(),
            messages: input.messages,
            minutes: input.minutes,
            message_credits: result.message_credits,
            call_credits: result.call_credits,
            total_consumed: result.total_consumed,
            remaining: result.remaining,
            display_remaining: result.display_remaining(),
            is_overage: result.is_overage(),
            overage: result.overage(),
        }
    }

    /// Overage warning text, or `None` when within the allotment.
    pub fn overage_warning(&self) -> Option<String> {
        self.is_overage.then(|| {
            format!(
                "You have exceeded your plan's credits by {} credits. \
                 Consider buying more credits or upgrading to a higher plan.",
                self.overage
            )
        })
    }
}
