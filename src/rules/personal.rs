use crate::core::field::FormData;

/// Step 1: personal information. Rule order is fixed and each rule
/// contributes at most one message, so callers can rely on stable error
/// ordering for display.
pub fn rules(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();

    if data.is_blank("name") {
        errors.push("Full name is required".to_string());
    }
    if data.is_blank("gender") {
        errors.push("Gender is required".to_string());
    }
    if data.is_blank("dob") {
        errors.push("Date of birth is required".to_string());
    }
    if data.is_blank("phone") {
        errors.push("Phone number is required".to_string());
    }
    if data.is_blank("email") {
        errors.push("Email is required".to_string());
    }

    let phone = data.text("phone");
    if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() != 10 {
        errors.push("Phone number must be 10 digits".to_string());
    }

    let email = data.text("email");
    if !email.is_empty() && !email.contains('@') {
        errors.push("Valid email is required".to_string());
    }

    errors
}
