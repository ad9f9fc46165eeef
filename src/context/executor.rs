use indexmap::IndexMap;
use serde_json::Value;

use crate::core::field::FormData;
use crate::format::display::format_date;

/// Executor section of the submission context. The second executor and
/// the wassiyat/specific-gift extras appear only when their form flags
/// were set.
pub fn executor_context(data: &FormData) -> IndexMap<String, Value> {
    let mut context = IndexMap::new();

    context.insert(
        "executor_name_one".to_string(),
        Value::from(data.text("exec1_name")),
    );
    context.insert(
        "executor_dob_one".to_string(),
        Value::from(format_date(data.text("exec1_dob"))),
    );
    context.insert(
        "relation_executor_one".to_string(),
        Value::from(data.text("exec1_relation")),
    );

    let include_second = data.flag("include_second_executor");
    context.insert(
        "include_second_executor".to_string(),
        Value::from(include_second),
    );
    if include_second {
        context.insert(
            "executor_name_second".to_string(),
            Value::from(data.text("exec2_name")),
        );
        context.insert(
            "executor_dob_second".to_string(),
            Value::from(format_date(data.text("exec2_dob"))),
        );
        context.insert(
            "relation_executor_second".to_string(),
            Value::from(data.text("exec2_relation")),
        );
    }

    if data.flag("wassiyat_include") {
        context.insert(
            "wassiyat_percentage_placeholder".to_string(),
            Value::from(data.text("wassiyat_percentage")),
        );
    }

    if data.flag("specific_gift_include") {
        context.insert(
            "specific_gift".to_string(),
            Value::from(data.text("specific_gift_text")),
        );
    }

    context
}

#[cfg(test)]
mod tests {
    use super::executor_context;
    use crate::core::field::FormData;

    #[test]
    fn second_executor_appears_only_when_included() {
        let base = FormData::new()
            .set("exec1_name", "Omar")
            .set("exec1_relation", "Brother")
            .set("exec1_dob", "1980-05-01");

        let context = executor_context(&base);
        assert_eq!(context["executor_name_one"], "Omar");
        assert_eq!(context["executor_dob_one"], "01 May 1980");
        assert_eq!(context["include_second_executor"], false);
        assert!(!context.contains_key("executor_name_second"));

        let with_second = base
            .set("include_second_executor", "true")
            .set("exec2_name", "Layla");
        let context = executor_context(&with_second);
        assert_eq!(context["executor_name_second"], "Layla");
    }

    #[test]
    fn specific_gift_is_gated_on_its_flag() {
        let data = FormData::new()
            .set("specific_gift_include", "true")
            .set("specific_gift_text", "The cabin");
        assert_eq!(executor_context(&data)["specific_gift"], "The cabin");

        let off = FormData::new().set("specific_gift_text", "The cabin");
        assert!(!executor_context(&off).contains_key("specific_gift"));
    }
}
