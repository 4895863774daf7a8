//! In-memory template store

use std::collections::BTreeMap;

use log::warn;

use super::{decode_record, encode_record, template_key, TemplateStore, TEMPLATE_KEY_PREFIX};
use crate::error::StoreError;
use crate::recognition::SignTemplate;

/// Key → JSON record map. Iteration is in key order, so `load_all` is stable.
#[derive(Clone, Debug, Default)]
pub struct MemoryTemplateStore {
    records: BTreeMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw record as-is (e.g. copied from another backend)
    pub fn insert_raw(&mut self, key: impl Into<String>, json: impl Into<String>) {
        self.records.insert(key.into(), json.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self, name: &str) -> Result<Option<SignTemplate>, StoreError> {
        let key = template_key(name);
        self.records
            .get(&key)
            .map(|json| decode_record(&key, json))
            .transpose()
    }

    fn save(&mut self, template: &SignTemplate) -> Result<(), StoreError> {
        let json = encode_record(template)?;
        self.records.insert(template_key(&template.name), json);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(self.records.remove(&template_key(name)).is_some())
    }

    fn load_all(&self) -> Result<Vec<SignTemplate>, StoreError> {
        let mut templates = Vec::new();
        for (key, json) in &self.records {
            if !key.starts_with(TEMPLATE_KEY_PREFIX) {
                continue;
            }
            match decode_record(key, json) {
                Ok(template) => templates.push(template),
                Err(e) => warn!("Failed to load template {key}: {e}"),
            }
        }
        Ok(templates)
    }
}
