use std::collections::BTreeMap;

use crate::core::field::FormData;
use crate::core::validation::{StepRule, ValidationResult};

/// Explicit mapping from step number to its rule set. Steps without a
/// registered rule set validate trivially, so unrecognized step numbers
/// pass instead of faulting.
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<u32, StepRule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        step: u32,
        rule: impl Fn(&FormData) -> Vec<String> + Send + Sync + 'static,
    ) {
        self.rules.insert(step, Box::new(rule));
    }

    pub fn with_rule(
        mut self,
        step: u32,
        rule: impl Fn(&FormData) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.register(step, rule);
        self
    }

    pub fn has_rules_for(&self, step: u32) -> bool {
        self.rules.contains_key(&step)
    }

    pub fn registered_steps(&self) -> impl Iterator<Item = u32> + '_ {
        self.rules.keys().copied()
    }

    pub fn validate(&self, step: u32, data: &FormData) -> ValidationResult {
        match self.rules.get(&step) {
            Some(rule) => ValidationResult::from_errors(rule(data)),
            None => {
                tracing::debug!(step, "no rule set registered, step passes");
                ValidationResult::ok()
            }
        }
    }
}
