use crate::core::field::FormData;

/// Step 2: executors. Name and relation of the first executor share one
/// combined message rather than erroring per field. The second executor
/// is only checked when the form opted into one.
pub fn rules(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();

    if data.is_blank("exec1_name") || data.is_blank("exec1_relation") {
        errors.push("First executor name and relation are required".to_string());
    }

    if data.flag("include_second_executor") {
        if data.is_blank("exec2_name") || data.is_blank("exec2_relation") {
            errors.push("Second executor name and relation are required when included".to_string());
        }
        if data.is_blank("exec2_dob") {
            errors.push("Second executor date of birth is required when included".to_string());
        }
    }

    errors
}
