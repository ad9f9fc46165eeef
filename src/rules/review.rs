use crate::core::field::FormData;

const SPOUSE_TERMS: [&str; 3] = ["wife", "husband", "spouse"];

/// Step 5: review and terms. A mirror will is only offered when the
/// primary executor is the spouse, so the relation text is checked here
/// rather than at document time.
pub fn rules(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();

    if !data.flag("terms_agreement") {
        errors.push("You must accept the terms and conditions".to_string());
    }

    if data.flag("mirror_will") {
        let relation = data.text("exec1_relation").to_lowercase();
        let is_spouse = SPOUSE_TERMS.iter().any(|term| relation.contains(term));
        if !is_spouse {
            errors.push("Mirror will requires spouse to be primary executor".to_string());
        }
    }

    errors
}
