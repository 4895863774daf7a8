//! Template matching - one frame against one or many sign templates
//!
//! Both sides are normalized before scoring, so the live hand can sit
//! anywhere in the image at any distance from the camera.

use log::debug;

use super::clock::{Clock, SystemClock};
use super::similarity::{hybrid_similarity, SimilarityWeights};
use super::template::{MatchOptions, PreparedTemplate, RecognitionResult, SignTemplate};
use crate::geometry::{normalize_hand, Landmark};

/// Scores frames against templates with a fixed weighting and time source
#[derive(Clone, Debug, Default)]
pub struct SignMatcher<C: Clock = SystemClock> {
    weights: SimilarityWeights,
    clock: C,
}

impl SignMatcher<SystemClock> {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self { weights, clock: SystemClock }
    }
}

impl<C: Clock> SignMatcher<C> {
    pub fn with_clock(weights: SimilarityWeights, clock: C) -> Self {
        Self { weights, clock }
    }

    pub fn weights(&self) -> SimilarityWeights {
        self.weights
    }

    pub fn set_weights(&mut self, weights: SimilarityWeights) {
        self.weights = weights;
    }

    /// Match a frame against a raw template (template normalized per call).
    ///
    /// An empty frame returns confidence 0 without touching any geometry.
    pub fn match_template(
        &self,
        frame: &[Landmark],
        template: &SignTemplate,
        options: Option<&MatchOptions>,
    ) -> RecognitionResult {
        if frame.is_empty() {
            return RecognitionResult::no_detection(&template.name, self.clock.now_ms());
        }
        let reference = normalize_hand(&template.landmarks);
        self.score(frame, &template.name, &reference, template.threshold, options)
    }

    /// Match against a template whose reference is already normalized
    pub fn match_prepared(
        &self,
        frame: &[Landmark],
        prepared: &PreparedTemplate,
        options: Option<&MatchOptions>,
    ) -> RecognitionResult {
        let template = prepared.template();
        if frame.is_empty() {
            return RecognitionResult::no_detection(&template.name, self.clock.now_ms());
        }
        self.score(frame, &template.name, prepared.normalized(), template.threshold, options)
    }

    /// Highest-confidence result over `templates`; ties keep the first seen.
    ///
    /// Returns `None` for an empty template list or an empty frame.
    pub fn find_best_match(
        &self,
        frame: &[Landmark],
        templates: &[SignTemplate],
        options: Option<&MatchOptions>,
    ) -> Option<RecognitionResult> {
        if frame.is_empty() {
            return None;
        }
        best_of(templates.iter().map(|t| self.match_template(frame, t, options)))
    }

    /// [`find_best_match`](Self::find_best_match) over prepared templates
    pub fn find_best_prepared(
        &self,
        frame: &[Landmark],
        templates: &[PreparedTemplate],
        options: Option<&MatchOptions>,
    ) -> Option<RecognitionResult> {
        if frame.is_empty() {
            return None;
        }
        best_of(templates.iter().map(|t| self.match_prepared(frame, t, options)))
    }

    fn score(
        &self,
        frame: &[Landmark],
        sign_name: &str,
        normalized_reference: &[Landmark],
        template_threshold: f32,
        options: Option<&MatchOptions>,
    ) -> RecognitionResult {
        let normalized_frame = normalize_hand(frame);
        let confidence = hybrid_similarity(&normalized_frame, normalized_reference, self.weights);
        let threshold = MatchOptions::effective_threshold(options, template_threshold);
        debug!("{sign_name}: confidence={confidence:.3} threshold={threshold:.2}");
        RecognitionResult::new(sign_name, confidence, threshold, self.clock.now_ms())
    }
}

fn best_of(results: impl Iterator<Item = RecognitionResult>) -> Option<RecognitionResult> {
    let mut best: Option<RecognitionResult> = None;
    for result in results {
        match &best {
            Some(current) if result.confidence <= current.confidence => {}
            _ => best = Some(result),
        }
    }
    best
}

/// Match with default weights and the system clock
pub fn match_sign_template(
    frame: &[Landmark],
    template: &SignTemplate,
    options: Option<&MatchOptions>,
) -> RecognitionResult {
    SignMatcher::new(SimilarityWeights::default()).match_template(frame, template, options)
}

/// Best match with default weights and the system clock
pub fn find_best_match(
    frame: &[Landmark],
    templates: &[SignTemplate],
    options: Option<&MatchOptions>,
) -> Option<RecognitionResult> {
    SignMatcher::new(SimilarityWeights::default()).find_best_match(frame, templates, options)
}
