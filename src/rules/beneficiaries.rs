use crate::core::field::FormData;

/// The step form renders at most this many beneficiary rows.
pub const MAX_LISTED: usize = 10;

/// Step 3: beneficiaries. Requires at least one row with both name and
/// relation, and (unless shares are split equally) a share column that
/// parses and totals 100%.
pub fn rules(data: &FormData) -> Vec<String> {
    let named: Vec<usize> = (1..=MAX_LISTED)
        .filter(|i| {
            !data.is_blank(&format!("beneficiary_{i}_name"))
                && !data.is_blank(&format!("beneficiary_{i}_relation"))
        })
        .collect();

    if named.is_empty() {
        return vec!["At least one beneficiary is required".to_string()];
    }

    let mut errors = Vec::new();

    if !data.flag("equal_shares") {
        let mut total = 0.0_f64;
        for i in named {
            let share = data.text(&format!("beneficiary_{i}_share"));
            if share.is_empty() {
                continue;
            }
            match share.trim().parse::<f64>() {
                Ok(value) => total += value,
                Err(_) => {
                    errors.push(format!("Beneficiary {i}: invalid share value"));
                    return errors;
                }
            }
        }
        if (total - 100.0).abs() > 0.01 {
            errors.push(format!(
                "Beneficiary shares must total 100% (currently {total:.2}%)"
            ));
        }
    }

    errors
}

/// Whole-form share check used at final submission. Tolerates both row
/// naming patterns the templates have shipped with
/// (`beneficiary_relation_1` and `beneficiary_1_relation`) and walks rows
/// until neither key exists.
pub fn share_total_rules(data: &FormData) -> Vec<String> {
    if data.flag("equal_shares") {
        return Vec::new();
    }

    let mut total = 0.0_f64;
    let mut i = 1usize;
    loop {
        let legacy_relation = format!("beneficiary_relation_{i}");
        let relation_key = if data.contains(&legacy_relation) {
            legacy_relation
        } else {
            let keyed = format!("beneficiary_{i}_relation");
            if !data.contains(&keyed) {
                break;
            }
            keyed
        };

        if !data.is_blank(&relation_key) {
            let legacy_share = format!("beneficiary_share_{i}");
            let share_key = if data.contains(&legacy_share) {
                legacy_share
            } else {
                format!("beneficiary_{i}_share")
            };
            let share = data.get(&share_key).unwrap_or("0");
            match share.trim().parse::<f64>() {
                Ok(value) => total += value,
                Err(_) => {
                    return vec![format!("Invalid share value for beneficiary {i}")];
                }
            }
        }
        i += 1;
    }

    if (total - 100.0).abs() > 0.01 {
        return vec![format!(
            "Total beneficiary shares are {total}%, must be exactly 100%"
        )];
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::{rules, share_total_rules};
    use crate::core::field::FormData;

    fn two_beneficiaries(share1: &str, share2: &str) -> FormData {
        FormData::new()
            .set("beneficiary_1_name", "Omar")
            .set("beneficiary_1_relation", "Son")
            .set("beneficiary_1_share", share1)
            .set("beneficiary_2_name", "Layla")
            .set("beneficiary_2_relation", "Daughter")
            .set("beneficiary_2_share", share2)
    }

    #[test]
    fn at_least_one_beneficiary_required() {
        assert_eq!(
            rules(&FormData::new()),
            vec!["At least one beneficiary is required"]
        );

        // Name without relation does not count as a row.
        let partial = FormData::new().set("beneficiary_1_name", "Omar");
        assert_eq!(
            rules(&partial),
            vec!["At least one beneficiary is required"]
        );
    }

    #[test]
    fn shares_must_total_one_hundred() {
        assert!(rules(&two_beneficiaries("60", "40")).is_empty());
        assert_eq!(
            rules(&two_beneficiaries("60", "30")),
            vec!["Beneficiary shares must total 100% (currently 90.00%)"]
        );
    }

    #[test]
    fn invalid_share_stops_the_arithmetic() {
        assert_eq!(
            rules(&two_beneficiaries("60", "forty")),
            vec!["Beneficiary 2: invalid share value"]
        );
    }

    #[test]
    fn equal_shares_skips_share_arithmetic() {
        let data = two_beneficiaries("", "").set("equal_shares", "true");
        assert!(rules(&data).is_empty());
    }

    #[test]
    fn whole_form_check_reads_both_naming_patterns() {
        let legacy = FormData::new()
            .set("beneficiary_relation_1", "Son")
            .set("beneficiary_share_1", "100");
        assert!(share_total_rules(&legacy).is_empty());

        let keyed = two_beneficiaries("50", "50");
        assert!(share_total_rules(&keyed).is_empty());

        let off = two_beneficiaries("50", "40");
        assert_eq!(
            share_total_rules(&off),
            vec!["Total beneficiary shares are 90%, must be exactly 100%"]
        );
    }
}
