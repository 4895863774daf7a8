//! Tracking frames - every hand detected in one camera frame
//!
//! The tracker hands over a flat `Float32Array` plus handedness labels. It is
//! validated here, once, so the rest of the engine only ever sees complete
//! 21-point hands.

use super::landmark::{HandLandmarks, Landmark, LANDMARK_COUNT};
use crate::error::FrameError;
use crate::recognition::Handedness;

/// Floats per hand in the flat layout (21 points × xyz)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedHand {
    pub landmarks: HandLandmarks,
    pub handedness: Handedness,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub hands: Vec<TrackedHand>,
}

impl HandFrame {
    /// A frame with no hands
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse `num_hands × 21 × 3` floats (hand-major, then point, then xyz).
    ///
    /// `labels` is a comma-separated handedness list ("Left,Right"). A missing
    /// or empty label is recorded as `Both`.
    pub fn from_flat(flat: &[f32], num_hands: usize, labels: &str) -> Result<Self, FrameError> {
        let expected = num_hands
            .checked_mul(FLOATS_PER_HAND)
            .ok_or(FrameError::LengthMismatch { expected: usize::MAX, actual: flat.len() })?;
        if flat.len() != expected {
            return Err(FrameError::LengthMismatch { expected, actual: flat.len() });
        }

        let labels: Vec<&str> = labels.split(',').map(str::trim).collect();
        let mut hands = Vec::with_capacity(num_hands);

        for (h, chunk) in flat.chunks_exact(FLOATS_PER_HAND).enumerate() {
            let mut points = [Landmark::ORIGIN; LANDMARK_COUNT];
            for (point, xyz) in points.iter_mut().zip(chunk.chunks_exact(3)) {
                *point = Landmark::new(xyz[0], xyz[1], xyz[2]);
            }

            let handedness = match labels.get(h).copied().unwrap_or("") {
                "" => Handedness::Both,
                label => Handedness::from_label(label)
                    .ok_or_else(|| FrameError::UnknownHandedness(label.to_string()))?,
            };

            hands.push(TrackedHand {
                landmarks: HandLandmarks::new(points),
                handedness,
            });
        }

        Ok(Self { hands })
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// First detected hand, the one judged in single-hand challenges
    pub fn primary_hand(&self) -> Option<&TrackedHand> {
        self.hands.first()
    }

    /// Primary hand's landmarks as a slice, `None` when nothing was detected
    pub fn primary_landmarks(&self) -> Option<&[Landmark]> {
        self.primary_hand().map(|h| &h.landmarks[..])
    }

    pub fn hand(&self, handedness: Handedness) -> Option<&TrackedHand> {
        self.hands.iter().find(|h| h.handedness == handedness)
    }
}
