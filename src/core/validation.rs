use crate::core::field::FormData;

/// A step's rule set: reads the submitted fields, returns the ordered
/// list of human-readable error messages (empty means the step passes).
pub type StepRule = Box<dyn Fn(&FormData) -> Vec<String> + Send + Sync>;

/// Outcome of validating one step (or the whole form). Validity is
/// defined by the error list alone; nothing here is ever thrown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        self.errors.as_slice()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationResult;

    #[test]
    fn valid_iff_no_errors() {
        assert!(ValidationResult::ok().is_valid());

        let mut result = ValidationResult::ok();
        result.push("Full name is required");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), &["Full name is required".to_string()]);
    }
}
