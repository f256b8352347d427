//! Calculator session: the selected plan, the two usage counts, and the
//! consumption result derived from them.
//!
//! Every mutator re-clamps what it touches and recomputes the result before
//! returning, so [`Session::result`] is never stale.

use crate::catalog::Catalog;
use crate::clamp::{clamp, clamp_value};
use crate::consumption::{compute, ConsumptionResult};
use crate::error::{CatalogError, Result};
use crate::summary::Summary;
use crate::types::{Plan, UsageInput};

/// Message count a fresh session starts with.
pub const DEFAULT_MESSAGES: u64 = 150;

/// Call minutes a fresh session starts with.
pub const DEFAULT_MINUTES: u64 = 30;

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    plan_idx: usize,
    input: UsageInput,
    result: ConsumptionResult,
}

impl Session {
    /// Start on the catalog's default plan with the default counts.
    pub fn new(catalog: Catalog) -> Self {
        let plan_idx = catalog.position(catalog.default_id()).unwrap_or(0);
        Self::start(catalog, plan_idx, DEFAULT_MESSAGES, DEFAULT_MINUTES)
    }

    /// Start on a specific plan (or the default) with explicit counts.
    ///
    /// Counts are clamped against the chosen plan's maxima.
    pub fn with_inputs(
        catalog: Catalog,
        plan_id: Option<&str>,
        messages: u64,
        minutes: u64,
    ) -> Result<Self> {
        let plan_id = plan_id.unwrap_or(catalog.default_id());
        let plan_idx = catalog
            .position(plan_id)
            .ok_or_else(|| CatalogError::NotFound(plan_id.to_string()))?;
        Ok(Self::start(catalog, plan_idx, messages, minutes))
    }

    fn start(catalog: Catalog, plan_idx: usize, messages: u64, minutes: u64) -> Self {
        let plan = &catalog.plans()[plan_idx];
        let input = UsageInput {
            plan_id: plan.id.clone(),
            messages: messages.min(plan.max_messages()),
            minutes: minutes.min(plan.max_minutes()),
        };
        let result = compute(plan, input.messages, input.minutes);
        Self {
            catalog,
            plan_idx,
            input,
            result,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan(&self) -> &Plan {
        &self.catalog.plans()[self.plan_idx]
    }

    pub fn input(&self) -> &UsageInput {
        &self.input
    }

    pub fn result(&self) -> &ConsumptionResult {
        &self.result
    }

    pub fn max_messages(&self) -> u64 {
        self.plan().max_messages()
    }

    pub fn max_minutes(&self) -> u64 {
        self.plan().max_minutes()
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.plan(), &self.input, &self.result)
    }

    // ── Plan selection ──

    /// Switch plans and re-clamp both counts to the new plan's maxima.
    ///
    /// An unknown id leaves the session untouched.
    pub fn select_plan(&mut self, plan_id: &str) -> Result<()> {
        let idx = self
            .catalog
            .position(plan_id)
            .ok_or_else(|| CatalogError::NotFound(plan_id.to_string()))?;
        self.select_index(idx);
        Ok(())
    }

    pub fn select_next_plan(&mut self) {
        let idx = (self.plan_idx + 1) % self.catalog.len();
        self.select_index(idx);
    }

    pub fn select_prev_plan(&mut self) {
        let len = self.catalog.len();
        let idx = (self.plan_idx + len - 1) % len;
        self.select_index(idx);
    }

    fn select_index(&mut self, idx: usize) {
        self.plan_idx = idx;
        let (plan_id, max_messages, max_minutes) = {
            let plan = self.plan();
            (plan.id.clone(), plan.max_messages(), plan.max_minutes())
        };
        tracing::debug!(plan = %plan_id, max_messages, max_minutes, "plan selected");
        self.input.plan_id = plan_id;
        self.input.messages = self.input.messages.min(max_messages);
        self.input.minutes = self.input.minutes.min(max_minutes);
        self.recompute();
    }

    // ── Counts: text origin ──

    /// Apply raw text from the message field. Invalid text stores 0.
    pub fn set_messages_text(&mut self, raw: &str) {
        self.input.messages = clamp(raw, self.max_messages());
        self.recompute();
    }

    /// Apply raw text from the minutes field. Invalid text stores 0.
    pub fn set_minutes_text(&mut self, raw: &str) {
        self.input.minutes = clamp(raw, self.max_minutes());
        self.recompute();
    }

    // ── Counts: continuous origin ──

    pub fn set_messages(&mut self, value: i64) {
        self.input.messages = clamp_value(value, self.max_messages());
        self.recompute();
    }

    pub fn set_minutes(&mut self, value: i64) {
        self.input.minutes = clamp_value(value, self.max_minutes());
        self.recompute();
    }

    /// Nudge the message count by `delta`, staying within bounds.
    pub fn step_messages(&mut self, delta: i64) {
        self.set_messages(offset(self.input.messages, delta));
    }

    /// Nudge the call minutes by `delta`, staying within bounds.
    pub fn step_minutes(&mut self, delta: i64) {
        self.set_minutes(offset(self.input.minutes, delta));
    }

    fn recompute(&mut self) {
        self.result = compute(self.plan(), self.input.messages, self.input.minutes);
        tracing::debug!(
            plan = %self.input.plan_id,
            messages = self.input.messages,
            minutes = self.input.minutes,
            total = self.result.total_consumed,
            remaining = self.result.remaining,
            "recomputed consumption"
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

fn offset(current: u64, delta: i64) -> i64 {
    i64::try_from(current).unwrap_or(i64::MAX).saturating_add(delta)
}
