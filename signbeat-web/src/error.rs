//! Error types for the boundary, store and configuration layers
//!
//! The recognition core itself never fails: degenerate input resolves to a
//! zero-confidence result. These errors only surface where data enters or
//! leaves the engine.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A tracking frame that could not be turned into hands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Invalid landmark data length: {actual} (expected {expected})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Unknown handedness label: {0:?}")]
    UnknownHandedness(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Template serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid template {name:?}: {reason}")]
    InvalidTemplate { name: String, reason: String },

    #[error("Template storage unavailable: {0}")]
    Unavailable(String),

    #[error("Template storage error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Similarity weights must be finite and non-negative (cosine={cosine}, euclidean={euclidean})")]
    InvalidWeights { cosine: f32, euclidean: f32 },

    #[error("Threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("Stability window needs at least one frame, got {0}")]
    InvalidMinFrames(usize),

    #[error("Stability window must be positive, got {0} ms")]
    InvalidWindow(f64),

    #[error("Unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<StoreError> for JsValue {
    fn from(err: StoreError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
