use indexmap::IndexMap;

use crate::core::field::FormData;

/// Accumulates accepted step data for the lifetime of one form session.
/// Each step's fields are kept under their section name and also merged
/// into a flat top-level map, where later steps overwrite earlier values
/// so submission assembly sees one namespace.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    sections: IndexMap<String, FormData>,
    merged: FormData,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, section: impl Into<String>, data: &FormData) {
        self.sections.insert(section.into(), data.clone());
        self.merged.merge_from(data);
    }

    pub fn section(&self, name: &str) -> Option<&FormData> {
        self.sections.get(name)
    }

    pub fn merged(&self) -> &FormData {
        &self.merged
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
        self.merged = FormData::new();
    }
}
