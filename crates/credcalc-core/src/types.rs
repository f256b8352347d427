use serde::{Deserialize, Serialize};

/// Credits charged for a single sent message.
pub const COST_PER_MESSAGE: u64 = 1;

/// Credits charged for a single minute of calls.
pub const COST_PER_MINUTE: u64 = 10;

/// Plan identifier (e.g. "basic", "pro")
pub type PlanId = String;

/// A subscription tier in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    /// Monthly credit allotment. Always positive in a validated catalog.
    pub credits: u64,
    /// Monthly price as displayed, e.g. "$130".
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Plan {
    /// Largest message count this plan's credits can cover.
    pub fn max_messages(&self) -> u64 {
        self.credits / COST_PER_MESSAGE
    }

    /// Largest number of call minutes this plan's credits can cover.
    pub fn max_minutes(&self) -> u64 {
        self.credits / COST_PER_MINUTE
    }
}

/// The mutable inputs of a calculator session.
///
/// `messages` and `minutes` are stored already clamped against the selected
/// plan's maxima.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageInput {
    pub plan_id: PlanId,
    pub messages: u64,
    pub minutes: u64,
}
