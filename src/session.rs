use crate::config::FlowConfig;
use crate::context::{WillContext, will_context};
use crate::core::field::FormData;
use crate::core::flow::StepTracker;
use crate::core::registry::RuleRegistry;
use crate::core::store::FormStore;
use crate::core::validation::ValidationResult;
use crate::rules;

/// One form's worth of state, explicitly constructed — nothing here is
/// global, so parallel sessions never observe each other. The two entry
/// points a UI adapter needs are `on_input_change` and `on_submit`; the
/// hosting toolkit (web page, TUI, test harness) stays out of this crate.
pub struct FormSession {
    config: FlowConfig,
    registry: RuleRegistry,
    tracker: StepTracker,
    store: FormStore,
}

impl FormSession {
    pub fn new(config: FlowConfig, registry: RuleRegistry) -> Self {
        let tracker = StepTracker::new(config.total_steps());
        Self {
            config,
            registry,
            tracker,
            store: FormStore::new(),
        }
    }

    /// The built-in five-step will form with its masks and rule sets.
    pub fn will_form() -> Self {
        Self::new(FlowConfig::will_form(), rules::will_form_registry())
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn tracker(&self) -> &StepTracker {
        &self.tracker
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Keystroke hook: apply the mask bound to `field_id`, or pass the
    /// raw text through untouched when the field has no mask. An unknown
    /// field id is a feature absence, never a fault.
    pub fn on_input_change(&self, field_id: &str, raw: &str) -> String {
        match self.config.mask_for(field_id) {
            Some(mask) => mask.apply(raw),
            None => raw.to_string(),
        }
    }

    /// Submit hook: run the step's rule set; accepted data is filed into
    /// the store under the step's section. The result object is the only
    /// failure channel.
    pub fn on_submit(&mut self, step: u32, data: &FormData) -> ValidationResult {
        let result = self.registry.validate(step, data);
        if result.is_valid() {
            if let Some(section) = self.config.section_for(step) {
                self.store.record(section, data);
            }
            tracing::debug!(step, "step accepted");
        } else {
            tracing::debug!(step, errors = result.errors().len(), "step rejected");
        }
        result
    }

    /// Step that follows `step` in this flow; `None` once the flow is
    /// complete.
    pub fn next_step(&self, step: u32) -> Option<u32> {
        (step < self.config.total_steps()).then(|| step + 1)
    }

    pub fn back(&mut self) -> Option<String> {
        self.tracker.back()
    }

    pub fn forward(&mut self) -> Option<String> {
        self.tracker.forward()
    }

    pub fn go_to(&mut self, step: u32) -> String {
        self.tracker.go_to(step)
    }

    /// Final submission: cross-step validation over the merged store,
    /// then template-context assembly. Failures come back as the same
    /// result object the per-step path uses.
    pub fn finalize(&self) -> Result<WillContext, ValidationResult> {
        let merged = self.store.merged();
        let result = rules::validate_all(merged);
        if !result.is_valid() {
            tracing::debug!(errors = result.errors().len(), "final validation rejected");
            return Err(result);
        }
        Ok(will_context(merged))
    }
}
