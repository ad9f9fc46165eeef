use indexmap::IndexMap;
use serde_json::Value;

use crate::core::field::FormData;
use crate::format::display::{Address, format_date};

/// POA section of the submission context. General and personal-care
/// attorneys live in one flat namespace with `_one`/`_two` and
/// `_three`/`_four` suffixes, matching the document template.
pub fn poa_context(data: &FormData) -> IndexMap<String, Value> {
    let mut context = IndexMap::new();

    if data.flag("include_poa") {
        context.insert("include_poa".to_string(), Value::from(true));
        insert_attorney(&mut context, data, "_one");
        if data.flag("second_poa") {
            insert_attorney(&mut context, data, "_two");
        }
    }

    if data.flag("include_poa_personal_care") {
        context.insert("include_poa_personal_care".to_string(), Value::from(true));
        insert_attorney(&mut context, data, "_three");
        if data.flag("second_poa_personal_care") {
            insert_attorney(&mut context, data, "_four");
        }
    }

    context
}

fn insert_attorney(context: &mut IndexMap<String, Value>, data: &FormData, suffix: &str) {
    context.insert(
        format!("poa_name{suffix}"),
        Value::from(data.text(&format!("poa_name{suffix}"))),
    );
    context.insert(
        format!("poa_relation{suffix}"),
        Value::from(data.text(&format!("poa_relation{suffix}"))),
    );
    context.insert(
        format!("poa_dob{suffix}"),
        Value::from(format_date(data.text(&format!("poa_dob{suffix}")))),
    );
    context.insert(
        format!("poa_address{suffix}"),
        Value::from(Address::from_form_keyed(data, "poa_", suffix).line()),
    );
}

/// Mirror-will variant: the first and second attorneys trade places so
/// the spouse's document names the couple in the opposite order. A block
/// without a second attorney is returned unchanged.
pub fn mirrored_poa(context: &IndexMap<String, Value>) -> IndexMap<String, Value> {
    let mut poa = context.clone();
    if poa.contains_key("poa_name_one") && poa.contains_key("poa_name_two") {
        swap(&mut poa, "poa_name_one", "poa_name_two");
        swap(&mut poa, "poa_relation_one", "poa_relation_two");
    }
    poa
}

fn swap(map: &mut IndexMap<String, Value>, a: &str, b: &str) {
    let first = map.get(a).cloned();
    let second = map.get(b).cloned();
    if let (Some(first), Some(second)) = (first, second) {
        map.insert(a.to_string(), second);
        map.insert(b.to_string(), first);
    }
}
