//! JS-facing surface of the recognition engine
//!
//! Tracker frames, template JSON and config arrive here from the host page.
//! Submodules hold the engine state and the `#[wasm_bindgen]` functions.

mod frame;
mod recognition;
mod templates;

pub use recognition::{
    best_match, configure, detect_pose, init_logging, is_target_matched, process_hand_frame,
    reset_recognition, set_difficulty, set_target_sign, target_average_confidence,
};

#[cfg(target_arch = "wasm32")]
pub use templates::load_templates_from_storage;
pub use templates::{delete_template, load_templates, record_template, sign_catalog};
