//! Recognition configuration and difficulty presets
//!
//! Hosts send configuration as JSON (camelCase keys); missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::recognition::{SimilarityWeights, DEFAULT_MIN_FRAMES, DEFAULT_WINDOW_MS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// Stability window (ms)
    pub window_ms: f64,
    /// Matched frames required inside the window
    pub min_frames: usize,
    pub cosine_weight: f32,
    pub euclidean_weight: f32,
    /// Replaces every template's own threshold when set
    pub threshold_override: Option<f32>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        let weights = SimilarityWeights::default();
        Self {
            window_ms: DEFAULT_WINDOW_MS,
            min_frames: DEFAULT_MIN_FRAMES,
            cosine_weight: weights.cosine,
            euclidean_weight: weights.euclidean,
            threshold_override: None,
        }
    }
}

impl RecognitionConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weight_ok = |w: f32| w.is_finite() && w >= 0.0;
        if !weight_ok(self.cosine_weight) || !weight_ok(self.euclidean_weight) {
            return Err(ConfigError::InvalidWeights {
                cosine: self.cosine_weight,
                euclidean: self.euclidean_weight,
            });
        }
        if !(self.window_ms.is_finite() && self.window_ms > 0.0) {
            return Err(ConfigError::InvalidWindow(self.window_ms));
        }
        if self.min_frames == 0 {
            return Err(ConfigError::InvalidMinFrames(self.min_frames));
        }
        if let Some(t) = self.threshold_override {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::InvalidThreshold(t));
            }
        }
        Ok(())
    }

    pub fn weights(&self) -> SimilarityWeights {
        SimilarityWeights::new(self.cosine_weight, self.euclidean_weight)
    }

    /// Use the difficulty's threshold for every template
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.threshold_override = Some(difficulty.threshold());
    }
}

/// Game difficulty; each level maps to a global match threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn threshold(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.70,
            Difficulty::Normal => 0.80,
            Difficulty::Hard => 0.85,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecognitionConfig::default();
        assert_eq!(config.window_ms, 500.0);
        assert_eq!(config.min_frames, 10);
        assert_eq!(config.weights(), SimilarityWeights::new(0.6, 0.4));
        assert!(config.threshold_override.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RecognitionConfig::from_json(r#"{"minFrames": 6, "thresholdOverride": 0.75}"#).unwrap();
        assert_eq!(config.min_frames, 6);
        assert_eq!(config.threshold_override, Some(0.75));
        assert_eq!(config.window_ms, 500.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            RecognitionConfig::from_json(r#"{"cosineWeight": -1.0}"#),
            Err(ConfigError::InvalidWeights { .. })
        ));
        assert!(matches!(
            RecognitionConfig::from_json(r#"{"thresholdOverride": 1.5}"#),
            Err(ConfigError::InvalidThreshold(_))
        ));
        assert!(matches!(
            RecognitionConfig::from_json(r#"{"windowMs": 0}"#),
            Err(ConfigError::InvalidWindow(_))
        ));
        assert!(matches!(
            RecognitionConfig::from_json(r#"{"minFrames": 0}"#),
            Err(ConfigError::InvalidMinFrames(0))
        ));
        assert!(matches!(RecognitionConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_difficulty_presets() {
        let mut config = RecognitionConfig::default();
        config.apply_difficulty("Hard".parse().unwrap());
        assert_eq!(config.threshold_override, Some(0.85));
        assert_eq!(Difficulty::Easy.threshold(), 0.70);
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
