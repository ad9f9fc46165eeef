use indexmap::IndexMap;

pub type FieldId = String;

/// Flat, ordered mapping of field name to raw string value for one step
/// (or, once merged, for the whole form). A missing key and an empty
/// string are indistinguishable to every consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    values: IndexMap<FieldId, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn set(mut self, id: impl Into<FieldId>, value: impl Into<String>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(|v| v.as_str())
    }

    /// Value of `id`, with absence read as the empty string.
    pub fn text(&self, id: &str) -> &str {
        self.get(id).unwrap_or("")
    }

    pub fn is_blank(&self, id: &str) -> bool {
        self.text(id).is_empty()
    }

    /// Checkbox/flag semantics: accepts the spellings browsers and the
    /// form templates actually send.
    pub fn flag(&self, id: &str) -> bool {
        matches!(
            self.text(id),
            "true" | "True" | "1" | "yes" | "Yes" | "on" | "On"
        )
    }

    /// Lenient share parse: empty or unparseable reads as 0.0.
    pub fn share(&self, id: &str) -> f64 {
        self.text(id).trim().parse().unwrap_or(0.0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every field of `other` into `self`, overwriting duplicates.
    pub fn merge_from(&mut self, other: &FormData) {
        for (id, value) in other.iter() {
            self.insert(id, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<FieldId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (id, value) in iter {
            data.insert(id, value);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::FormData;

    #[test]
    fn missing_key_reads_as_empty() {
        let data = FormData::new();
        assert_eq!(data.text("name"), "");
        assert!(data.is_blank("name"));
    }

    #[test]
    fn flag_accepts_form_spellings() {
        let data = FormData::new()
            .set("a", "true")
            .set("b", "On")
            .set("c", "checked")
            .set("d", "");
        assert!(data.flag("a"));
        assert!(data.flag("b"));
        assert!(!data.flag("c"));
        assert!(!data.flag("d"));
        assert!(!data.flag("missing"));
    }

    #[test]
    fn share_defaults_to_zero() {
        let data = FormData::new().set("s", "33.5").set("bad", "half");
        assert_eq!(data.share("s"), 33.5);
        assert_eq!(data.share("bad"), 0.0);
        assert_eq!(data.share("missing"), 0.0);
    }

    #[test]
    fn merge_overwrites_duplicates() {
        let mut base = FormData::new().set("city", "Surrey").set("name", "A");
        let update = FormData::new().set("city", "Vancouver");
        base.merge_from(&update);
        assert_eq!(base.text("city"), "Vancouver");
        assert_eq!(base.text("name"), "A");
    }
}
