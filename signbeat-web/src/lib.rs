//! SignBeat Web - hand-sign recognition engine for the rhythm game
//!
//! The browser loads this crate as a wasm module; the start hook below installs
//! the panic hook and every other JS-callable function lives in `bridge`.
//!
//! The recognition core (`geometry`, `recognition`, `store`) is plain Rust and
//! also builds natively for tests and tools.

mod bridge;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod recognition;
pub mod store;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    best_match, configure, delete_template, detect_pose, init_logging, is_target_matched,
    load_templates, process_hand_frame, record_template, reset_recognition, set_difficulty,
    set_target_sign, sign_catalog, target_average_confidence,
};
#[cfg(target_arch = "wasm32")]
pub use bridge::load_templates_from_storage;

pub use config::{Difficulty, RecognitionConfig};
pub use error::{ConfigError, FrameError, StoreError};
pub use geometry::{HandFrame, HandLandmarks, Landmark, TrackedHand};
pub use recognition::{
    find_best_match, match_sign_template, Handedness, MatchOptions, RecognitionResult,
    RecognitionSession, SignMatcher, SignTemplate, TimeWindowMatcher,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
