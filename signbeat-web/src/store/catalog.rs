//! Built-in sign catalog
//!
//! Metadata for the signs the game ships with. Reference landmarks are
//! recorded per player, so descriptors carry everything except the pose.

use serde::Serialize;

use crate::geometry::HandLandmarks;
use crate::recognition::{Handedness, SignTemplate};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub handedness: Handedness,
    pub threshold: f32,
    pub description: &'static str,
}

impl SignDescriptor {
    /// Complete the descriptor with recorded reference landmarks
    pub fn with_landmarks(&self, landmarks: HandLandmarks) -> SignTemplate {
        SignTemplate {
            id: self.id.to_string(),
            name: self.name.to_string(),
            display_name: self.display_name.to_string(),
            landmarks,
            handedness: self.handedness,
            threshold: self.threshold,
            description: Some(self.description.to_string()),
            image_url: None,
        }
    }
}

static CATALOG: [SignDescriptor; 5] = [
    SignDescriptor {
        id: "open-hand",
        name: "열린",
        display_name: "열린 손",
        handedness: Handedness::Both,
        threshold: 0.80,
        description: "Palm open, all fingers spread",
    },
    SignDescriptor {
        id: "closed-fist",
        name: "주먹",
        display_name: "주먹",
        handedness: Handedness::Both,
        threshold: 0.85,
        description: "All fingers folded into a fist",
    },
    SignDescriptor {
        id: "v-sign",
        name: "V자",
        display_name: "V자 (평화)",
        handedness: Handedness::Both,
        threshold: 0.80,
        description: "Index and middle fingers raised in a V",
    },
    SignDescriptor {
        id: "thumbs-up",
        name: "좋아요",
        display_name: "엄지 척",
        handedness: Handedness::Both,
        threshold: 0.85,
        description: "Thumb raised, other fingers folded",
    },
    SignDescriptor {
        id: "together",
        name: "우리가_함께",
        display_name: "함께 (모으기)",
        handedness: Handedness::Both,
        threshold: 0.75,
        description: "Both hands brought together in front of the chest",
    },
];

pub fn default_catalog() -> &'static [SignDescriptor] {
    &CATALOG
}
