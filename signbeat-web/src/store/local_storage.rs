//! Browser `localStorage` template store (wasm32 only)

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::{decode_record, encode_record, template_key, TemplateStore, TEMPLATE_KEY_PREFIX};
use crate::error::StoreError;
use crate::recognition::SignTemplate;

pub struct LocalStorageTemplateStore {
    storage: Storage,
}

fn backend(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl LocalStorageTemplateStore {
    /// Open the window's `localStorage`
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(backend)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let len = self.storage.length().map_err(backend)?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(backend)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

impl TemplateStore for LocalStorageTemplateStore {
    fn load(&self, name: &str) -> Result<Option<SignTemplate>, StoreError> {
        let key = template_key(name);
        self.storage
            .get_item(&key)
            .map_err(backend)?
            .map(|json| decode_record(&key, &json))
            .transpose()
    }

    fn save(&mut self, template: &SignTemplate) -> Result<(), StoreError> {
        let json = encode_record(template)?;
        self.storage
            .set_item(&template_key(&template.name), &json)
            .map_err(backend)
    }

    fn remove(&mut self, name: &str) -> Result<bool, StoreError> {
        let key = template_key(name);
        let existed = self.storage.get_item(&key).map_err(backend)?.is_some();
        self.storage.remove_item(&key).map_err(backend)?;
        Ok(existed)
    }

    fn load_all(&self) -> Result<Vec<SignTemplate>, StoreError> {
        let mut templates = Vec::new();
        for key in self.keys()? {
            if !key.starts_with(TEMPLATE_KEY_PREFIX) {
                continue;
            }
            let Some(json) = self.storage.get_item(&key).map_err(backend)? else {
                continue;
            };
            match decode_record(&key, &json) {
                Ok(template) => templates.push(template),
                Err(e) => warn!("Failed to load template {key}: {e}"),
            }
        }
        Ok(templates)
    }
}
