//! Recognition engine state - config, template library and target session
//!
//! One engine per page, held in a thread-local like the rest of the bridge.
//! Every `#[wasm_bindgen]` function here is a thin wrapper over `Engine`.

use log::{info, warn};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::frame::parse_frame;
use crate::config::{Difficulty, RecognitionConfig};
use crate::error::ConfigError;
use crate::geometry::HandFrame;
use crate::logging;
use crate::recognition::{
    classify_pose, MatchOptions, PreparedTemplate, RecognitionResult, RecognitionSession,
    SignMatcher, SignTemplate,
};

pub(crate) struct Engine {
    config: RecognitionConfig,
    session: RecognitionSession,
    matcher: SignMatcher,
    /// Normalized once on load
    library: Vec<PreparedTemplate>,
}

impl Default for Engine {
    fn default() -> Self {
        let config = RecognitionConfig::default();
        Self {
            session: RecognitionSession::new(&config),
            matcher: SignMatcher::new(config.weights()),
            library: Vec::new(),
            config,
        }
    }
}

impl Engine {
    pub(crate) fn configure(&mut self, config: RecognitionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.session.apply_config(&config);
        self.matcher.set_weights(config.weights());
        self.config = config;
        Ok(())
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        let mut config = self.config.clone();
        config.apply_difficulty(difficulty);
        self.session.apply_config(&config);
        self.config = config;
        info!("Difficulty: {} (threshold {:.2})", difficulty.as_str(), difficulty.threshold());
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    /// Replace the whole library. The target keeps its own copy.
    pub(crate) fn replace_library(&mut self, templates: Vec<SignTemplate>) {
        self.library = templates.into_iter().map(PreparedTemplate::new).collect();
        info!("📚 Loaded {} sign templates", self.library.len());
    }

    /// Insert or replace one template by name
    pub(crate) fn upsert_template(&mut self, template: SignTemplate) {
        let prepared = PreparedTemplate::new(template);
        match self.library.iter_mut().find(|t| t.name() == prepared.name()) {
            Some(slot) => *slot = prepared,
            None => self.library.push(prepared),
        }
    }

    /// Drop a template from the library, clearing the target if it was the one
    pub(crate) fn remove_template(&mut self, name: &str) -> bool {
        let before = self.library.len();
        self.library.retain(|t| t.name() != name);
        if self.session.target().is_some_and(|t| t.name == name) {
            self.session.set_target(None);
        }
        self.library.len() != before
    }

    #[cfg(test)]
    pub(crate) fn library_len(&self) -> usize {
        self.library.len()
    }

    /// Returns false (and clears the target) when no template has that name
    pub(crate) fn set_target(&mut self, name: &str) -> bool {
        let template = self
            .library
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.template().clone());
        let found = template.is_some();
        if !found {
            warn!("Unknown target sign: {name}");
        }
        self.session.set_target(template);
        found
    }

    /// Feed one frame to the target session; confidence of this frame
    pub(crate) fn process(&mut self, frame: &HandFrame) -> f32 {
        self.session
            .process(frame.primary_landmarks())
            .map(|r| r.confidence)
            .unwrap_or(0.0)
    }

    pub(crate) fn is_matched(&self) -> bool {
        self.session.is_matched()
    }

    pub(crate) fn average_confidence(&self) -> f32 {
        self.session.average_confidence()
    }

    pub(crate) fn best_match(&self, frame: &HandFrame) -> Option<RecognitionResult> {
        let hand = frame.primary_landmarks()?;
        let options = MatchOptions { threshold: self.config.threshold_override };
        self.matcher.find_best_prepared(hand, &self.library, Some(&options))
    }

    pub(crate) fn reset(&mut self) {
        self.session.reset();
    }
}

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::default());
}

pub(crate) fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|engine_cell| f(&mut engine_cell.borrow_mut()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Install the console logger ("error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    if logging::init(logging::parse_level(level)).is_err() {
        warn!("Another logger is already installed");
    }
}

/// Replace the recognition config from JSON (camelCase keys, missing = default)
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = RecognitionConfig::from_json(json)?;
    with_engine(|engine| engine.configure(config))?;
    Ok(())
}

/// Apply a difficulty preset ("easy", "normal", "hard")
#[wasm_bindgen]
pub fn set_difficulty(name: &str) -> Result<(), JsValue> {
    let difficulty: Difficulty = name.parse()?;
    with_engine(|engine| engine.set_difficulty(difficulty));
    Ok(())
}

/// Select the challenge target. Resets the stability window.
#[wasm_bindgen]
pub fn set_target_sign(name: &str) -> bool {
    with_engine(|engine| engine.set_target(name))
}

/// Run one tracking frame against the target; returns this frame's confidence
#[wasm_bindgen]
pub fn process_hand_frame(flat: &[f32], handedness: &str) -> f32 {
    let frame = parse_frame(flat, handedness);
    with_engine(|engine| engine.process(&frame))
}

#[wasm_bindgen]
pub fn is_target_matched() -> bool {
    with_engine(|engine| engine.is_matched())
}

#[wasm_bindgen]
pub fn target_average_confidence() -> f32 {
    with_engine(|engine| engine.average_confidence())
}

/// Best library match for this frame as a JSON `RecognitionResult`
#[wasm_bindgen]
pub fn best_match(flat: &[f32], handedness: &str) -> Option<String> {
    let frame = parse_frame(flat, handedness);
    let result = with_engine(|engine| engine.best_match(&frame))?;
    match serde_json::to_string(&result) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Failed to encode match result: {e}");
            None
        }
    }
}

/// Template-free pose name of the first hand, empty when nothing matches
#[wasm_bindgen]
pub fn detect_pose(flat: &[f32]) -> String {
    let frame = parse_frame(flat, "");
    frame
        .primary_landmarks()
        .and_then(classify_pose)
        .map(|pose| pose.as_str().to_string())
        .unwrap_or_default()
}

#[wasm_bindgen]
pub fn reset_recognition() {
    with_engine(|engine| engine.reset());
}
