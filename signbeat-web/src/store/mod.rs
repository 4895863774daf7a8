//! Template store - whole `SignTemplate` records in a key-value backend
//!
//! Records are JSON strings under `template_<name>`, the layout the web
//! recorder has always written to `localStorage`.

mod catalog;
#[cfg(target_arch = "wasm32")]
mod local_storage;
mod memory;
mod recorder;

pub use catalog::{default_catalog, SignDescriptor};
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageTemplateStore;
pub use memory::MemoryTemplateStore;
pub use recorder::TemplateRecorder;

use crate::error::StoreError;
use crate::recognition::SignTemplate;

/// Key prefix for template records
pub const TEMPLATE_KEY_PREFIX: &str = "template_";

pub fn template_key(name: &str) -> String {
    format!("{TEMPLATE_KEY_PREFIX}{name}")
}

/// Backend holding whole template records keyed by sign name
pub trait TemplateStore {
    fn load(&self, name: &str) -> Result<Option<SignTemplate>, StoreError>;

    /// Insert or overwrite the record for `template.name`
    fn save(&mut self, template: &SignTemplate) -> Result<(), StoreError>;

    /// Returns whether a record was removed
    fn remove(&mut self, name: &str) -> Result<bool, StoreError>;

    /// Every readable template. Unreadable records are skipped and logged.
    fn load_all(&self) -> Result<Vec<SignTemplate>, StoreError>;
}

impl<T: TemplateStore + ?Sized> TemplateStore for &mut T {
    fn load(&self, name: &str) -> Result<Option<SignTemplate>, StoreError> {
        (**self).load(name)
    }

    fn save(&mut self, template: &SignTemplate) -> Result<(), StoreError> {
        (**self).save(template)
    }

    fn remove(&mut self, name: &str) -> Result<bool, StoreError> {
        (**self).remove(name)
    }

    fn load_all(&self) -> Result<Vec<SignTemplate>, StoreError> {
        (**self).load_all()
    }
}

/// Decode one record, checking it is usable for matching
pub(crate) fn decode_record(key: &str, json: &str) -> Result<SignTemplate, StoreError> {
    let template: SignTemplate = serde_json::from_str(json)?;
    if !(0.0..=1.0).contains(&template.threshold) {
        return Err(StoreError::InvalidTemplate {
            name: key.to_string(),
            reason: format!("threshold {} outside [0, 1]", template.threshold),
        });
    }
    Ok(template)
}

pub(crate) fn encode_record(template: &SignTemplate) -> Result<String, StoreError> {
    Ok(serde_json::to_string(template)?)
}
