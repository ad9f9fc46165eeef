pub mod config;
pub mod context;
pub mod core;
pub mod format;
pub mod rules;
pub mod session;

pub use config::{ConfigError, FlowConfig, StepConfig};
pub use context::{WillContext, will_context};
pub use core::step_path;
pub use core::{FieldId, FormData, FormStore, RuleRegistry, StepStatus, StepTracker};
pub use core::{StepRule, ValidationResult};
pub use format::{Address, Mask, format_date, title_case};
pub use rules::{validate_all, will_form_registry};
pub use session::FormSession;
