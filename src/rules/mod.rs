pub mod beneficiaries;
pub mod executors;
pub mod personal;
pub mod poa;
pub mod review;

use std::sync::LazyLock;

use regex::Regex;

use crate::core::field::FormData;
use crate::core::registry::RuleRegistry;
use crate::core::validation::ValidationResult;

/// The five-step will form with its rule sets registered in step order.
pub fn will_form_registry() -> RuleRegistry {
    RuleRegistry::new()
        .with_rule(1, personal::rules)
        .with_rule(2, executors::rules)
        .with_rule(3, beneficiaries::rules)
        .with_rule(4, poa::rules)
        .with_rule(5, review::rules)
}

const REQUIRED_PERSONAL_FIELDS: [&str; 5] = ["name", "gender", "dob", "phone", "email"];

const REQUIRED_ADDRESS_FIELDS: [&str; 6] = [
    "street_number",
    "street_name",
    "city",
    "regional_municipality",
    "province",
    "postal_code",
];

const DATE_FIELDS: [&str; 3] = ["dob", "exec1_dob", "exec2_dob"];

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

/// Cross-step validation of the merged form, run once before submission
/// assembly. Checks everything the per-step rules cannot see at once.
pub fn validate_all(data: &FormData) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for field in REQUIRED_PERSONAL_FIELDS {
        if data.is_blank(field) {
            result.push(format!("Missing required field: {field}"));
        }
    }

    for field in REQUIRED_ADDRESS_FIELDS {
        if data.is_blank(field) {
            result.push(format!("Missing required field: {field}"));
        }
    }

    for error in beneficiaries::share_total_rules(data) {
        result.push(error);
    }

    for field in DATE_FIELDS {
        let value = data.text(field);
        if !value.is_empty() && !DATE_RE.is_match(value) {
            result.push(format!("Invalid date format for {field}"));
        }
    }

    result
}
