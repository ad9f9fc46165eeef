pub mod field;
pub mod flow;
pub mod registry;
pub mod store;
pub mod validation;

pub use field::{FieldId, FormData};
pub use flow::{StepStatus, StepTracker};
pub use registry::RuleRegistry;
pub use store::FormStore;
pub use validation::{StepRule, ValidationResult};

/// Path the hosting router serves a step at.
pub fn step_path(step: u32) -> String {
    format!("/step/{step}")
}
