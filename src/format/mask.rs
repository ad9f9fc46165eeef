use serde::{Deserialize, Serialize};

/// As-you-type masks. Each is a pure transform of the field's whole
/// current text, re-applied on every keystroke, so each must be
/// idempotent on its own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mask {
    Phone,
    PostalCode,
}

impl Mask {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Mask::Phone => phone(raw),
            Mask::PostalCode => postal_code(raw),
        }
    }
}

/// Digit-only phone mask: everything that is not an ASCII digit is
/// dropped, and anything past the tenth digit is silently discarded.
pub fn phone(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(10)
        .collect()
}

/// Canadian postal grouping: uppercase, keep only `A-Z0-9`, and insert a
/// single space after the third character once there is a fourth. Input
/// longer than six cleaned characters keeps growing after the space; the
/// mask never trims the tail.
pub fn postal_code(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if cleaned.len() > 3 {
        format!("{} {}", &cleaned[..3], &cleaned[3..])
    } else {
        cleaned
    }
}
