//! Hand landmark types shared by every recognition stage
//!
//! MediaPipe Hands delivers 21 points per hand in a fixed anatomical order.
//! That order is part of the interface: index constants below are used
//! directly by the normalizer and the pose heuristics.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of points in one hand skeleton
pub const LANDMARK_COUNT: usize = 21;

/// Hand skeleton connections (bones), for hosts that draw the overlay
pub const HAND_SKELETON: [(usize, usize); 20] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D landmark point (camera-normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32, // 0-1 across the image
    pub y: f32, // 0-1 down the image
    pub z: f32, // relative depth, wrist-referenced
}

impl Landmark {
    pub const ORIGIN: Landmark = Landmark { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One detected hand: exactly 21 landmarks in MediaPipe order.
///
/// The only way to build one from untrusted data is `TryFrom<Vec<Landmark>>`,
/// so holders of a `HandLandmarks` can index any anatomical slot safely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandLandmarks([Landmark; LANDMARK_COUNT]);

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.0
    }
}

impl Deref for HandLandmarks {
    type Target = [Landmark];

    fn deref(&self) -> &[Landmark] {
        &self.0
    }
}

impl AsRef<[Landmark]> for HandLandmarks {
    fn as_ref(&self) -> &[Landmark] {
        &self.0
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = String;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let len = points.len();
        <[Landmark; LANDMARK_COUNT]>::try_from(points)
            .map(Self)
            .map_err(|_| format!("expected {LANDMARK_COUNT} landmarks, got {len}"))
    }
}

impl TryFrom<&[Landmark]> for HandLandmarks {
    type Error = String;

    fn try_from(points: &[Landmark]) -> Result<Self, Self::Error> {
        <[Landmark; LANDMARK_COUNT]>::try_from(points)
            .map(Self)
            .map_err(|_| format!("expected {LANDMARK_COUNT} landmarks, got {}", points.len()))
    }
}

impl From<HandLandmarks> for Vec<Landmark> {
    fn from(hand: HandLandmarks) -> Self {
        hand.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_requires_21_points() {
        assert!(HandLandmarks::try_from(vec![Landmark::ORIGIN; 21]).is_ok());
        let err = HandLandmarks::try_from(vec![Landmark::ORIGIN; 20]).unwrap_err();
        assert!(err.contains("got 20"));
    }

    #[test]
    fn test_serde_rejects_short_hand() {
        let json = serde_json::to_string(&vec![Landmark::ORIGIN; 5]).unwrap();
        assert!(serde_json::from_str::<HandLandmarks>(&json).is_err());
    }

    #[test]
    fn test_skeleton_covers_every_joint() {
        let mut seen = [false; LANDMARK_COUNT];
        for (a, b) in HAND_SKELETON {
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
