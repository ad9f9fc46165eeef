pub mod beneficiaries;
pub mod executor;
pub mod poa;

use indexmap::IndexMap;
use serde_json::Value;

pub use beneficiaries::beneficiaries_context;
pub use executor::executor_context;
pub use poa::{mirrored_poa, poa_context};

use crate::core::field::FormData;
use crate::format::display::{Address, format_date};

/// Ordered template context assembled from a validated, merged form —
/// the handoff shape for a document renderer.
pub type WillContext = IndexMap<String, Value>;

/// Assemble the full submission context: POA, executor, and beneficiary
/// sections first, then the personal fields and mirror-will options the
/// template reads at top level.
pub fn will_context(data: &FormData) -> WillContext {
    let mut context = WillContext::new();
    context.extend(poa_context(data));
    context.extend(executor_context(data));
    context.extend(beneficiaries_context(data));

    let address = Address::from_form(data).line();

    let mut field = |key: &str, value: Value| {
        context.insert(key.to_string(), value);
    };

    field("name", Value::from(data.text("name")));
    field("gender", Value::from(data.text("gender")));
    field("dob", Value::from(format_date(data.text("dob"))));
    field("address", Value::from(address.clone()));
    field("full_address", Value::from(address));
    field("city", Value::from(data.text("city")));
    field(
        "regional_municipality",
        Value::from(data.text("regional_municipality")),
    );
    field("street_number", Value::from(data.text("street_number")));
    field("street_name", Value::from(data.text("street_name")));
    field("province", Value::from(data.text("province")));
    field("postal_code", Value::from(data.text("postal_code")));

    field("pronoun", Value::from(pronoun(data.text("gender"))));

    field("mirror_will", Value::from(data.flag("mirror_will")));
    field("mirror_poa", Value::from(data.flag("mirror_poa")));
    field("mirror_notes", Value::from(data.text("mirror_notes")));

    context
}

fn pronoun(gender: &str) -> &'static str {
    if gender.eq_ignore_ascii_case("male") {
        "his"
    } else {
        "her"
    }
}

#[cfg(test)]
mod tests {
    use super::will_context;
    use crate::core::field::FormData;

    fn form() -> FormData {
        FormData::new()
            .set("name", "Amira Hassan")
            .set("gender", "female")
            .set("dob", "1985-03-12")
            .set("street_number", "123")
            .set("street_name", "main st")
            .set("city", "surrey")
            .set("regional_municipality", "metro vancouver")
            .set("province", "bc")
            .set("postal_code", "v3s1b2")
            .set("exec1_name", "Tariq Hassan")
            .set("exec1_relation", "Husband")
            .set("exec1_dob", "1982-07-04")
            .set("beneficiary_1_name", "omar hassan")
            .set("beneficiary_1_relation", "son")
            .set("beneficiary_1_dob", "2010-01-01")
            .set("beneficiary_1_share", "100")
            .set("mirror_will", "true")
    }

    #[test]
    fn assembles_sections_and_personal_fields() {
        let context = will_context(&form());
        assert_eq!(context["name"], "Amira Hassan");
        assert_eq!(context["dob"], "12 Mar 1985");
        assert_eq!(
            context["address"],
            "123 Main St, Surrey, Metro Vancouver, Bc, V3S1B2"
        );
        assert_eq!(context["address"], context["full_address"]);
        assert_eq!(context["executor_name_one"], "Tariq Hassan");
        assert_eq!(context["has_beneficiaries"], true);
        assert_eq!(context["mirror_will"], true);
    }

    #[test]
    fn pronoun_follows_gender() {
        let context = will_context(&form());
        assert_eq!(context["pronoun"], "her");

        let context = will_context(&form().set("gender", "Male"));
        assert_eq!(context["pronoun"], "his");
    }
}
