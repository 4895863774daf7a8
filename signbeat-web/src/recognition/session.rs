//! Recognition session - drives one challenge target frame by frame
//!
//! Owns the target template, the matcher and the stability window. The host
//! calls `process` once per tracking frame and reads `is_matched` for judging.

use log::{debug, info};

use super::clock::{Clock, SystemClock};
use super::matcher::SignMatcher;
use super::template::{MatchOptions, PreparedTemplate, RecognitionResult, SignTemplate};
use super::time_window::TimeWindowMatcher;
use crate::config::RecognitionConfig;
use crate::geometry::Landmark;

pub struct RecognitionSession<C: Clock + Clone = SystemClock> {
    target: Option<PreparedTemplate>,
    matcher: SignMatcher<C>,
    window: TimeWindowMatcher<C>,
    options: MatchOptions,
    last_result: Option<RecognitionResult>,
    was_matched: bool,
}

impl RecognitionSession<SystemClock> {
    pub fn new(config: &RecognitionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> RecognitionSession<C> {
    pub fn with_clock(config: &RecognitionConfig, clock: C) -> Self {
        Self {
            target: None,
            matcher: SignMatcher::with_clock(config.weights(), clock.clone()),
            window: TimeWindowMatcher::with_clock(config.window_ms, config.min_frames, clock),
            options: MatchOptions { threshold: config.threshold_override },
            last_result: None,
            was_matched: false,
        }
    }

    /// Apply new weights, window and threshold override. Queued results stay.
    pub fn apply_config(&mut self, config: &RecognitionConfig) {
        self.matcher.set_weights(config.weights());
        self.window.configure(config.window_ms, config.min_frames);
        self.options.threshold = config.threshold_override;
    }

    /// Switch the challenge target. Always clears the stability window so a
    /// match on the previous sign cannot leak into this one.
    pub fn set_target(&mut self, template: Option<SignTemplate>) {
        self.target = template.map(PreparedTemplate::new);
        self.reset();
        if let Some(target) = &self.target {
            info!("🎯 Target sign: {}", target.name());
        }
    }

    pub fn target(&self) -> Option<&SignTemplate> {
        self.target.as_ref().map(PreparedTemplate::template)
    }

    /// Score one frame's hand against the target and feed the window.
    ///
    /// Returns `None` (and feeds nothing) when there is no target or no hand.
    pub fn process(&mut self, hand: Option<&[Landmark]>) -> Option<RecognitionResult> {
        let target = self.target.as_ref()?;
        let hand = hand.filter(|h| !h.is_empty())?;

        let result = self.matcher.match_prepared(hand, target, Some(&self.options));
        self.window.add_result(result.clone());

        let matched = self.window.is_stable_match(target.name());
        if matched != self.was_matched {
            if matched {
                info!("✅ Stable match: {} ({:.2})", target.name(), result.confidence);
            } else {
                debug!("Stable match lost: {}", target.name());
            }
            self.was_matched = matched;
        }

        self.last_result = Some(result.clone());
        Some(result)
    }

    /// Debounced decision for the current target
    pub fn is_matched(&self) -> bool {
        self.target
            .as_ref()
            .map(|t| self.window.is_stable_match(t.name()))
            .unwrap_or(false)
    }

    pub fn average_confidence(&self) -> f32 {
        self.target
            .as_ref()
            .map(|t| self.window.average_confidence(t.name()))
            .unwrap_or(0.0)
    }

    pub fn last_result(&self) -> Option<&RecognitionResult> {
        self.last_result.as_ref()
    }

    /// Confidence of the last processed frame, 0 before any
    pub fn confidence(&self) -> f32 {
        self.last_result.as_ref().map(|r| r.confidence).unwrap_or(0.0)
    }

    pub fn reset(&mut self) {
        self.window.reset();
        self.last_result = None;
        self.was_matched = false;
    }
}
