//! Sign templates and recognition results

use serde::{Deserialize, Serialize};

use crate::geometry::{normalize_hand, HandLandmarks, Landmark};

/// Which hand a template (or a tracked hand) belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
    Both,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
            Handedness::Both => "Both",
        }
    }

    /// Parse a MediaPipe handedness label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Handedness::Left),
            "right" => Some(Handedness::Right),
            "both" => Some(Handedness::Both),
            _ => None,
        }
    }
}

/// Reference pose for one recognizable sign.
///
/// Serialized with camelCase keys so records written by the web recorder
/// (`displayName`, `imageUrl`) load unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTemplate {
    pub id: String,
    /// Matching name; results and the stability window key on this
    pub name: String,
    pub display_name: String,
    pub landmarks: HandLandmarks,
    pub handedness: Handedness,
    /// Match threshold in [0, 1]
    pub threshold: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Per-call matching options
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MatchOptions {
    /// Overrides `SignTemplate::threshold` when set
    pub threshold: Option<f32>,
}

impl MatchOptions {
    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold: Some(threshold) }
    }

    /// Override first, then the template's own threshold
    pub fn effective_threshold(options: Option<&MatchOptions>, template_threshold: f32) -> f32 {
        options
            .and_then(|o| o.threshold)
            .unwrap_or(template_threshold)
    }
}

/// Outcome of comparing one frame against one template
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionResult {
    pub sign_name: String,
    /// Similarity in [0, 1]
    pub confidence: f32,
    pub matched: bool,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
}

impl RecognitionResult {
    pub fn new(sign_name: impl Into<String>, confidence: f32, threshold: f32, timestamp: f64) -> Self {
        let confidence = if confidence.is_nan() { 0.0 } else { confidence.clamp(0.0, 1.0) };
        Self {
            sign_name: sign_name.into(),
            confidence,
            matched: confidence >= threshold,
            timestamp,
        }
    }

    /// Zero-confidence result for a frame with no usable hand
    pub fn no_detection(sign_name: impl Into<String>, timestamp: f64) -> Self {
        Self {
            sign_name: sign_name.into(),
            confidence: 0.0,
            matched: false,
            timestamp,
        }
    }
}

/// A template with its reference landmarks normalized once at load time.
///
/// Matching against a `PreparedTemplate` gives the same scores as matching
/// against the raw template; it only skips the repeated normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedTemplate {
    template: SignTemplate,
    normalized: Vec<Landmark>,
}

impl PreparedTemplate {
    pub fn new(template: SignTemplate) -> Self {
        let normalized = normalize_hand(&template.landmarks);
        Self { template, normalized }
    }

    pub fn template(&self) -> &SignTemplate {
        &self.template
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn normalized(&self) -> &[Landmark] {
        &self.normalized
    }

    pub fn into_template(self) -> SignTemplate {
        self.template
    }
}

impl From<SignTemplate> for PreparedTemplate {
    fn from(template: SignTemplate) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        assert!(!RecognitionResult::new("open", 0.79, 0.80, 0.0).matched);
        assert!(RecognitionResult::new("open", 0.80, 0.80, 0.0).matched);
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(RecognitionResult::new("a", 1.5, 0.5, 0.0).confidence, 1.0);
        assert_eq!(RecognitionResult::new("a", -0.5, 0.5, 0.0).confidence, 0.0);
        assert_eq!(RecognitionResult::new("a", f32::NAN, 0.5, 0.0).confidence, 0.0);
    }

    #[test]
    fn test_override_precedence() {
        let opts = MatchOptions::with_threshold(0.5);
        assert_eq!(MatchOptions::effective_threshold(Some(&opts), 0.9), 0.5);
        assert_eq!(MatchOptions::effective_threshold(Some(&MatchOptions::default()), 0.9), 0.9);
        assert_eq!(MatchOptions::effective_threshold(None, 0.9), 0.9);
    }

    #[test]
    fn test_handedness_labels() {
        assert_eq!(Handedness::from_label("Left"), Some(Handedness::Left));
        assert_eq!(Handedness::from_label(" right "), Some(Handedness::Right));
        assert_eq!(Handedness::from_label("unknown"), None);
        assert_eq!(Handedness::Both.as_str(), "Both");
    }

    #[test]
    fn test_template_json_uses_camel_case() {
        let template = SignTemplate {
            id: "open-hand".into(),
            name: "open".into(),
            display_name: "Open hand".into(),
            landmarks: HandLandmarks::new([Landmark::ORIGIN; 21]),
            handedness: Handedness::Both,
            threshold: 0.8,
            description: None,
            image_url: None,
        };
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("\"displayName\":\"Open hand\""));
        assert!(!json.contains("imageUrl"));
        let back: SignTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
