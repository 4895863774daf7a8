//! Template authoring - capture the current hand as a new sign template

use log::info;

use super::TemplateStore;
use crate::error::StoreError;
use crate::geometry::{normalize_hand, HandFrame, HandLandmarks};
use crate::recognition::SignTemplate;

/// Writes templates recorded from live frames into a store
pub struct TemplateRecorder<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> TemplateRecorder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Record the frame's primary hand as template `name` and save it.
    ///
    /// The stored landmarks are already normalized. Matching normalizes again,
    /// which leaves them unchanged.
    pub fn record(
        &mut self,
        frame: &HandFrame,
        name: &str,
        display_name: &str,
        threshold: f32,
    ) -> Result<SignTemplate, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidTemplate {
                name: name.to_string(),
                reason: "empty sign name".into(),
            });
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(StoreError::InvalidTemplate {
                name: name.to_string(),
                reason: format!("threshold {threshold} outside [0, 1]"),
            });
        }
        let hand = frame.primary_hand().ok_or_else(|| StoreError::InvalidTemplate {
            name: name.to_string(),
            reason: "no hand detected".into(),
        })?;

        let normalized = HandLandmarks::try_from(normalize_hand(&hand.landmarks))
            .map_err(|reason| StoreError::InvalidTemplate { name: name.to_string(), reason })?;

        let display_name = match display_name.trim() {
            "" => name,
            d => d,
        };
        let template = SignTemplate {
            id: format!("{}_{}", name, template_id_suffix(&hand.landmarks)),
            name: name.to_string(),
            display_name: display_name.to_string(),
            landmarks: normalized,
            handedness: hand.handedness,
            threshold,
            description: None,
            image_url: None,
        };

        self.store.save(&template)?;
        info!("📝 Template recorded: {} ({})", template.display_name, template.name);
        Ok(template)
    }
}

/// Short stable suffix derived from the raw pose, so re-recordings get new ids
fn template_id_suffix(landmarks: &HandLandmarks) -> String {
    let hash = landmarks
        .iter()
        .flat_map(|p| [p.x, p.y, p.z])
        .fold(0xcbf2_9ce4_8422_2325u64, |h, v| {
            (h ^ u64::from(v.to_bits())).wrapping_mul(0x0100_0000_01b3)
        });
    format!("{:08x}", hash as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Landmark, FLOATS_PER_HAND, MIDDLE_TIP, WRIST};
    use crate::recognition::Handedness;
    use crate::store::MemoryTemplateStore;

    fn frame() -> HandFrame {
        let flat: Vec<f32> = (0..FLOATS_PER_HAND).map(|i| 0.2 + i as f32 * 0.002).collect();
        HandFrame::from_flat(&flat, 1, "Right").unwrap()
    }

    #[test]
    fn test_record_saves_normalized_template() {
        let mut recorder = TemplateRecorder::new(MemoryTemplateStore::new());
        let template = recorder.record(&frame(), "fist", "Fist", 0.85).unwrap();
        assert_eq!(template.landmarks[WRIST], Landmark::ORIGIN);
        let tip = template.landmarks[MIDDLE_TIP];
        assert!(((tip.x * tip.x + tip.y * tip.y + tip.z * tip.z).sqrt() - 1.0).abs() < 1e-5);
        assert_eq!(template.handedness, Handedness::Right);
        assert!(template.id.starts_with("fist_"));
        assert_eq!(recorder.store().load("fist").unwrap(), Some(template));
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let mut recorder = TemplateRecorder::new(MemoryTemplateStore::new());
        let template = recorder.record(&frame(), "open", "  ", 0.8).unwrap();
        assert_eq!(template.display_name, "open");
    }

    #[test]
    fn test_record_errors() {
        let mut recorder = TemplateRecorder::new(MemoryTemplateStore::new());
        assert!(recorder.record(&HandFrame::empty(), "fist", "Fist", 0.85).is_err());
        assert!(recorder.record(&frame(), "fist", "Fist", 1.2).is_err());
        assert!(recorder.record(&frame(), " ", "Fist", 0.8).is_err());
        assert!(recorder.into_store().is_empty());
    }
}
