use chrono::NaiveDate;

use crate::core::field::FormData;

/// Trim, split on whitespace, capitalize each word. "mcdonald AVE" comes
/// back as "Mcdonald Ave" — the original form pipeline does the same.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Render a stored `YYYY-MM-DD` value as `01 Feb 1990`. A trailing time
/// component (`YYYY-MM-DD 00:00:00`) is tolerated. Anything that does not
/// parse is passed through as its first whitespace token.
pub fn format_date(input: &str) -> String {
    let token = input.trim().split(' ').next().unwrap_or("");
    if token.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => token.to_string(),
    }
}

/// Address components as the form collects them; any part may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub regional_municipality: String,
    pub province: String,
    pub postal_code: String,
}

impl Address {
    /// Read the top-level address fields (`street_number`, `city`, ...).
    pub fn from_form(data: &FormData) -> Self {
        Self::from_form_keyed(data, "", "")
    }

    /// Read address fields named `{prefix}street_number{suffix}` etc.,
    /// as the POA sections store them (`poa_city_one`, `poa_city_three`).
    pub fn from_form_keyed(data: &FormData, prefix: &str, suffix: &str) -> Self {
        let field = |name: &str| data.text(&format!("{prefix}{name}{suffix}")).to_string();
        Self {
            street_number: field("street_number"),
            street_name: field("street_name"),
            city: field("city"),
            regional_municipality: field("regional_municipality"),
            province: field("province"),
            postal_code: field("postal_code"),
        }
    }

    /// Concise single-line rendering: title-cased street and locality
    /// parts, uppercased postal code, blanks skipped.
    pub fn line(&self) -> String {
        let mut items = Vec::new();

        let street = format!("{} {}", self.street_number.trim(), self.street_name.trim());
        let street = street.trim();
        if !street.is_empty() {
            items.push(title_case(street));
        }

        for part in [&self.city, &self.regional_municipality, &self.province] {
            if !part.is_empty() {
                items.push(title_case(part));
            }
        }

        if !self.postal_code.is_empty() {
            items.push(self.postal_code.to_uppercase());
        }

        items.retain(|item| !item.is_empty());
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, format_date, title_case};
    use crate::core::field::FormData;

    #[test]
    fn title_case_normalizes_words() {
        assert_eq!(title_case("  main   STREET "), "Main Street");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("123 main st"), "123 Main St");
    }

    #[test]
    fn format_date_renders_readable() {
        assert_eq!(format_date("1990-02-01"), "01 Feb 1990");
        assert_eq!(format_date("1990-02-01 00:00:00"), "01 Feb 1990");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("01/02/1990"), "01/02/1990");
    }

    #[test]
    fn address_line_skips_blanks() {
        let data = FormData::new()
            .set("street_number", "123")
            .set("street_name", "main st")
            .set("city", "surrey")
            .set("province", "bc")
            .set("postal_code", "v6b1a1");
        assert_eq!(
            Address::from_form(&data).line(),
            "123 Main St, Surrey, Bc, V6B1A1"
        );
    }

    #[test]
    fn address_reads_keyed_fields() {
        let data = FormData::new()
            .set("poa_street_number_one", "9")
            .set("poa_street_name_one", "oak ave")
            .set("poa_city_one", "delta");
        let address = Address::from_form_keyed(&data, "poa_", "_one");
        assert_eq!(address.line(), "9 Oak Ave, Delta");
    }

    #[test]
    fn empty_address_renders_empty() {
        assert_eq!(Address::default().line(), "");
    }
}
