use crate::core::field::FormData;

const ADDRESS_FIELDS: [&str; 5] = [
    "poa_street_number",
    "poa_street_name",
    "poa_city",
    "poa_province",
    "poa_postal_code",
];

/// Step 4: powers of attorney. Each POA block is validated only when its
/// include flag is set; with neither flag the step passes trivially.
pub fn rules(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();

    if data.flag("include_poa") {
        attorney_rules(&mut errors, data, "General POA attorney", "_one");
    }
    if data.flag("include_poa_personal_care") {
        attorney_rules(&mut errors, data, "Personal care POA attorney", "_three");
    }

    errors
}

fn attorney_rules(errors: &mut Vec<String>, data: &FormData, label: &str, suffix: &str) {
    if data.is_blank(&format!("poa_name{suffix}")) || data.is_blank(&format!("poa_relation{suffix}"))
    {
        errors.push(format!("{label} name and relation are required"));
    }
    if data.is_blank(&format!("poa_dob{suffix}")) {
        errors.push(format!("{label} date of birth is required"));
    }
    for field in ADDRESS_FIELDS {
        let key = format!("{field}{suffix}");
        if data.is_blank(&key) {
            let spaced = field.replace('_', " ");
            errors.push(format!("{label} {spaced} is required"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::rules;
    use crate::core::field::FormData;

    fn general_poa() -> FormData {
        FormData::new()
            .set("include_poa", "true")
            .set("poa_name_one", "Omar")
            .set("poa_relation_one", "Brother")
            .set("poa_dob_one", "1980-05-01")
            .set("poa_street_number_one", "12")
            .set("poa_street_name_one", "Oak Ave")
            .set("poa_city_one", "Delta")
            .set("poa_province_one", "BC")
            .set("poa_postal_code_one", "V4C 2K1")
    }

    #[test]
    fn no_flags_passes_trivially() {
        assert!(rules(&FormData::new()).is_empty());
    }

    #[test]
    fn complete_general_poa_passes() {
        assert!(rules(&general_poa()).is_empty());
    }

    #[test]
    fn included_poa_reports_combined_name_relation_first() {
        let data = FormData::new().set("include_poa", "true");
        let errors = rules(&data);
        assert_eq!(errors[0], "General POA attorney name and relation are required");
        assert_eq!(errors[1], "General POA attorney date of birth is required");
        assert!(errors.contains(&"General POA attorney poa street number is required".to_string()));
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn personal_care_block_uses_three_suffix() {
        let data = general_poa()
            .set("include_poa_personal_care", "true")
            .set("poa_name_three", "Layla")
            .set("poa_relation_three", "Sister")
            .set("poa_dob_three", "1983-09-09")
            .set("poa_street_number_three", "44")
            .set("poa_street_name_three", "Pine St")
            .set("poa_city_three", "Surrey")
            .set("poa_province_three", "BC")
            .set("poa_postal_code_three", "V3S 1B2");
        assert!(rules(&data).is_empty());
    }
}
