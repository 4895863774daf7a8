//! Template library entry points - load, record and delete sign templates
//!
//! Persisted templates live in `localStorage` on wasm32. Native builds use an
//! in-memory store so the same paths run under `cargo test`.

use log::info;
use wasm_bindgen::prelude::*;

use super::frame::parse_frame;
use super::recognition::with_engine;
use crate::error::StoreError;
use crate::recognition::SignTemplate;
use crate::store::{default_catalog, TemplateRecorder, TemplateStore};

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NATIVE_STORE: std::cell::RefCell<crate::store::MemoryTemplateStore> =
        std::cell::RefCell::new(crate::store::MemoryTemplateStore::new());
}

/// Run `f` against the persistent template store
#[cfg(target_arch = "wasm32")]
fn with_store<R>(f: impl FnOnce(&mut dyn TemplateStore) -> Result<R, StoreError>) -> Result<R, StoreError> {
    let mut store = crate::store::LocalStorageTemplateStore::open()?;
    f(&mut store)
}

#[cfg(not(target_arch = "wasm32"))]
fn with_store<R>(f: impl FnOnce(&mut dyn TemplateStore) -> Result<R, StoreError>) -> Result<R, StoreError> {
    NATIVE_STORE.with(|store_cell| f(&mut *store_cell.borrow_mut()))
}

/// Parse a JSON template array, rejecting thresholds outside [0, 1]
pub(crate) fn parse_library(json: &str) -> Result<Vec<SignTemplate>, StoreError> {
    let templates: Vec<SignTemplate> = serde_json::from_str(json)?;
    if let Some(bad) = templates.iter().find(|t| !(0.0..=1.0).contains(&t.threshold)) {
        return Err(StoreError::InvalidTemplate {
            name: bad.name.clone(),
            reason: format!("threshold {} outside [0, 1]", bad.threshold),
        });
    }
    Ok(templates)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn reload_from_store() -> Result<usize, StoreError> {
    let templates = with_store(|store| store.load_all())?;
    let count = templates.len();
    with_engine(|engine| engine.replace_library(templates));
    Ok(count)
}

pub(crate) fn record(
    flat: &[f32],
    handedness: &str,
    name: &str,
    display_name: &str,
    threshold: f32,
) -> Result<SignTemplate, StoreError> {
    let frame = parse_frame(flat, handedness);
    let template = with_store(|store| {
        TemplateRecorder::new(store).record(&frame, name, display_name, threshold)
    })?;
    with_engine(|engine| engine.upsert_template(template.clone()));
    Ok(template)
}

pub(crate) fn delete(name: &str) -> Result<bool, StoreError> {
    let stored = with_store(|store| store.remove(name))?;
    let loaded = with_engine(|engine| engine.remove_template(name));
    if stored || loaded {
        info!("🗑️ Template deleted: {name}");
    }
    Ok(stored || loaded)
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Replace the in-memory library from a JSON array; returns the count
#[wasm_bindgen]
pub fn load_templates(json: &str) -> Result<usize, JsValue> {
    let templates = parse_library(json)?;
    let count = templates.len();
    with_engine(|engine| engine.replace_library(templates));
    Ok(count)
}

/// Load every stored `template_*` record; unreadable records are skipped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn load_templates_from_storage() -> Result<usize, JsValue> {
    Ok(reload_from_store()?)
}

/// Record the first hand of this frame as a template and persist it.
/// Returns the template as JSON.
#[wasm_bindgen]
pub fn record_template(
    flat: &[f32],
    handedness: &str,
    name: &str,
    display_name: &str,
    threshold: f32,
) -> Result<String, JsValue> {
    let template = record(flat, handedness, name, display_name, threshold)?;
    serde_json::to_string(&template).map_err(|e| StoreError::from(e).into())
}

#[wasm_bindgen]
pub fn delete_template(name: &str) -> Result<bool, JsValue> {
    Ok(delete(name)?)
}

/// Built-in sign descriptors as a JSON array, for the recorder's sign picker
#[wasm_bindgen]
pub fn sign_catalog() -> Result<String, JsValue> {
    serde_json::to_string(default_catalog()).map_err(|e| StoreError::from(e).into())
}
