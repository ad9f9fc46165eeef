use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::mask::Mask;

/// Declarative flow definition: the ordered steps plus the field-id to
/// mask bindings. Sessions are built from one of these, so test harnesses
/// and parallel forms stay isolated from each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    pub title: String,
    pub steps: Vec<StepConfig>,
    #[serde(default)]
    pub masks: IndexMap<String, Mask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    pub number: u32,
    pub title: String,
    /// Store section this step's accepted data files under.
    pub section: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse flow definition: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("flow definition has no steps")]
    Empty,
    #[error("step numbers must run 1..={expected}, found {found}")]
    StepNumbering { expected: u32, found: u32 },
}

impl FlowConfig {
    /// The built-in five-step will form.
    pub fn will_form() -> Self {
        let step = |number, title: &str, section: &str| StepConfig {
            number,
            title: title.to_string(),
            section: section.to_string(),
        };
        let mut masks = IndexMap::new();
        masks.insert("phone".to_string(), Mask::Phone);
        masks.insert("postal_code".to_string(), Mask::PostalCode);

        Self {
            title: "Will creation".to_string(),
            steps: vec![
                step(1, "Personal information", "personal"),
                step(2, "Executors", "executors"),
                step(3, "Beneficiaries", "beneficiaries"),
                step(4, "Power of attorney", "poa"),
                step(5, "Review", "review"),
            ],
            masks,
        }
    }

    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::Empty);
        }
        let expected = self.steps.len() as u32;
        for (index, step) in self.steps.iter().enumerate() {
            if step.number != index as u32 + 1 {
                return Err(ConfigError::StepNumbering {
                    expected,
                    found: step.number,
                });
            }
        }
        Ok(self)
    }

    pub fn total_steps(&self) -> u32 {
        self.steps.len() as u32
    }

    pub fn step(&self, number: u32) -> Option<&StepConfig> {
        self.steps.iter().find(|step| step.number == number)
    }

    pub fn section_for(&self, number: u32) -> Option<&str> {
        self.step(number).map(|step| step.section.as_str())
    }

    pub fn mask_for(&self, field_id: &str) -> Option<Mask> {
        self.masks.get(field_id).copied()
    }
}
