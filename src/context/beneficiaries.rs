use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::core::field::FormData;
use crate::format::display::{format_date, title_case};

/// Hard cap on collected rows; the step form itself stops at 10.
pub const MAX_BENEFICIARIES: usize = 50;

#[derive(Debug, Clone)]
struct Beneficiary {
    relation: String,
    name: String,
    dob: String,
    share: f64,
}

/// Beneficiary section of the submission context: normalized rows with
/// title-cased names, display dates, and shares resolved to two-decimal
/// strings. Equal-share mode (or an all-zero share column) distributes
/// 100% evenly.
pub fn beneficiaries_context(data: &FormData) -> IndexMap<String, Value> {
    let mut beneficiaries = Vec::new();

    for i in 1..=MAX_BENEFICIARIES {
        let name = data.text(&format!("beneficiary_{i}_name"));
        let relation = data.text(&format!("beneficiary_{i}_relation"));
        let dob = data.text(&format!("beneficiary_{i}_dob"));

        if !name.is_empty() && !relation.is_empty() && !dob.is_empty() {
            beneficiaries.push(Beneficiary {
                relation: title_case(relation),
                name: title_case(name),
                dob: format_date(dob),
                share: data.share(&format!("beneficiary_{i}_share")),
            });
        }
    }

    let has_beneficiaries = !beneficiaries.is_empty();
    let equal_shares = data.flag("equal_shares");

    if has_beneficiaries {
        let total: f64 = beneficiaries.iter().map(|b| b.share).sum();
        if equal_shares || total <= 0.0 {
            let even = round2(100.0 / beneficiaries.len() as f64);
            for beneficiary in &mut beneficiaries {
                beneficiary.share = even;
            }
        }
    }

    let rows: Vec<Value> = beneficiaries
        .iter()
        .map(|b| {
            json!({
                "relation": b.relation,
                "name": b.name,
                "dob": b.dob,
                "share": format!("{:.2}", b.share),
            })
        })
        .collect();

    let mut context = IndexMap::new();
    context.insert("beneficiaries".to_string(), Value::Array(rows));
    context.insert(
        "has_beneficiaries".to_string(),
        Value::from(has_beneficiaries),
    );
    context.insert("equal_shares".to_string(), Value::from(equal_shares));
    context
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
