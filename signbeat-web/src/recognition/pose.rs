//! Template-free pose heuristics
//!
//! Rule-based finger-curl and palm-direction tests over raw landmarks. This is
//! the fallback recognizer when no template exists for a sign. Every function
//! accepts any slice and treats anything shorter than a full hand as "nothing
//! detected".

use crate::geometry::vector::{cross, distance, normalize, vector_between};
use crate::geometry::{
    Landmark, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP, WRIST,
};

/// A finger is curled when its tip is closer to the wrist than this fraction
/// of its PIP joint's distance.
pub const CURL_RATIO: f32 = 0.9;

/// Lateral margin (normalized x) for the thumb curl test
pub const THUMB_CURL_MARGIN: f32 = 0.05;

/// Minimum normal component for a palm direction to count
pub const PALM_AXIS_THRESHOLD: f32 = 0.3;

/// Curl state per finger (`true` = curled)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

/// Which way the palm faces relative to the camera
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PalmDirection {
    Forward,
    Backward,
    Left,
    Right,
    Neutral,
}

impl PalmDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left => "left",
            Self::Right => "right",
            Self::Neutral => "neutral",
        }
    }

    pub fn is_sideways(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Poses the heuristic path can name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    Fist,
    OpenHand,
    VSign,
    ThumbsUp,
}

impl Pose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fist => "fist",
            Self::OpenHand => "open-hand",
            Self::VSign => "v-sign",
            Self::ThumbsUp => "thumbs-up",
        }
    }
}

fn is_full_hand(landmarks: &[Landmark]) -> bool {
    landmarks.len() >= LANDMARK_COUNT
}

/// Curled iff `|wrist→tip| < 0.9 · |wrist→pip|`.
///
/// `_mcp` is accepted for call-site symmetry with the joint triplets.
pub fn is_finger_curled(landmarks: &[Landmark], tip: usize, pip: usize, _mcp: usize) -> bool {
    let (Some(&wrist), Some(&tip), Some(&pip)) =
        (landmarks.get(WRIST), landmarks.get(tip), landmarks.get(pip))
    else {
        return false;
    };
    distance(wrist, tip) < distance(wrist, pip) * CURL_RATIO
}

/// Thumb curl is mostly lateral, so it is judged on x alone
pub fn is_thumb_curled(landmarks: &[Landmark]) -> bool {
    match (landmarks.get(THUMB_TIP), landmarks.get(THUMB_IP)) {
        (Some(tip), Some(ip)) => tip.x < ip.x - THUMB_CURL_MARGIN,
        _ => false,
    }
}

pub fn detect_finger_states(landmarks: &[Landmark]) -> FingerState {
    if !is_full_hand(landmarks) {
        return FingerState::default();
    }

    FingerState {
        thumb: is_thumb_curled(landmarks),
        index: is_finger_curled(landmarks, INDEX_TIP, INDEX_PIP, INDEX_MCP),
        middle: is_finger_curled(landmarks, MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
        ring: is_finger_curled(landmarks, RING_TIP, RING_PIP, RING_MCP),
        pinky: is_finger_curled(landmarks, PINKY_TIP, PINKY_PIP, PINKY_MCP),
    }
}

/// Palm normal from (wrist→middle MCP) × (wrist→index MCP), bucketed.
///
/// z is checked before x, so a palm facing the camera wins over a sideways tilt.
pub fn detect_palm_direction(landmarks: &[Landmark]) -> PalmDirection {
    if !is_full_hand(landmarks) {
        return PalmDirection::Neutral;
    }

    let wrist = landmarks[WRIST];
    let to_middle = vector_between(wrist, landmarks[MIDDLE_MCP]);
    let to_index = vector_between(wrist, landmarks[INDEX_MCP]);
    let normal = normalize(cross(to_middle, to_index));

    if normal.z < -PALM_AXIS_THRESHOLD {
        PalmDirection::Forward
    } else if normal.z > PALM_AXIS_THRESHOLD {
        PalmDirection::Backward
    } else if normal.x < -PALM_AXIS_THRESHOLD {
        PalmDirection::Left
    } else if normal.x > PALM_AXIS_THRESHOLD {
        PalmDirection::Right
    } else {
        PalmDirection::Neutral
    }
}

/// Four fingers curled; the thumb is ignored
pub fn detect_fist(landmarks: &[Landmark]) -> bool {
    let f = detect_finger_states(landmarks);
    is_full_hand(landmarks) && f.index && f.middle && f.ring && f.pinky
}

/// Nothing curled
pub fn detect_open_hand(landmarks: &[Landmark]) -> bool {
    let f = detect_finger_states(landmarks);
    is_full_hand(landmarks) && !f.thumb && !f.index && !f.middle && !f.ring && !f.pinky
}

/// Index and middle extended, ring and pinky curled. No thumb condition.
pub fn detect_v_sign(landmarks: &[Landmark]) -> bool {
    let f = detect_finger_states(landmarks);
    is_full_hand(landmarks) && !f.index && !f.middle && f.ring && f.pinky
}

/// Thumb extended, the other four curled, palm turned sideways
pub fn detect_thumbs_up(landmarks: &[Landmark]) -> bool {
    let f = detect_finger_states(landmarks);
    is_full_hand(landmarks)
        && !f.thumb
        && f.index
        && f.middle
        && f.ring
        && f.pinky
        && detect_palm_direction(landmarks).is_sideways()
}

/// First matching pose, most specific first
pub fn classify_pose(landmarks: &[Landmark]) -> Option<Pose> {
    if detect_thumbs_up(landmarks) {
        Some(Pose::ThumbsUp)
    } else if detect_v_sign(landmarks) {
        Some(Pose::VSign)
    } else if detect_fist(landmarks) {
        Some(Pose::Fist)
    } else if detect_open_hand(landmarks) {
        Some(Pose::OpenHand)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGERS: [(usize, usize, usize, usize); 4] = [
        (INDEX_MCP, INDEX_PIP, 7, INDEX_TIP),
        (MIDDLE_MCP, MIDDLE_PIP, 11, MIDDLE_TIP),
        (RING_MCP, RING_PIP, 15, RING_TIP),
        (PINKY_MCP, PINKY_PIP, 19, PINKY_TIP),
    ];

    /// Upright hand in the image plane, wrist at the bottom.
    /// `curled[i]` folds finger i back toward the wrist.
    fn make_hand(curled: [bool; 4], thumb_curled: bool) -> Vec<Landmark> {
        let mut hand = vec![Landmark::ORIGIN; LANDMARK_COUNT];
        hand[WRIST] = Landmark::new(0.5, 0.9, 0.0);

        for (i, &(mcp, pip, dip, tip)) in FINGERS.iter().enumerate() {
            let x = 0.44 + 0.04 * i as f32;
            hand[mcp] = Landmark::new(x, 0.70, 0.0);
            hand[pip] = Landmark::new(x, 0.60, 0.0);
            if curled[i] {
                hand[dip] = Landmark::new(x, 0.66, 0.0);
                hand[tip] = Landmark::new(x, 0.74, 0.0);
            } else {
                hand[dip] = Landmark::new(x, 0.54, 0.0);
                hand[tip] = Landmark::new(x, 0.48, 0.0);
            }
        }

        hand[1] = Landmark::new(0.44, 0.85, 0.0);
        hand[2] = Landmark::new(0.40, 0.80, 0.0);
        hand[THUMB_IP] = Landmark::new(0.36, 0.76, 0.0);
        hand[THUMB_TIP] = if thumb_curled {
            Landmark::new(0.28, 0.76, 0.0)
        } else {
            Landmark::new(0.36, 0.70, 0.0)
        };
        hand
    }

    /// Rotate so the palm normal points along ±x (hand seen edge-on)
    fn turn_sideways(hand: &[Landmark]) -> Vec<Landmark> {
        let wrist = hand[WRIST];
        hand.iter()
            .map(|p| Landmark::new(wrist.x, p.y, wrist.z + (p.x - wrist.x)))
            .collect()
    }

    #[test]
    fn test_finger_curl_rule() {
        let hand = make_hand([true, false, false, false], false);
        assert!(is_finger_curled(&hand, INDEX_TIP, INDEX_PIP, INDEX_MCP));
        assert!(!is_finger_curled(&hand, MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP));
    }

    #[test]
    fn test_short_input_is_nothing() {
        let short = vec![Landmark::ORIGIN; 5];
        assert_eq!(detect_finger_states(&short), FingerState::default());
        assert_eq!(detect_palm_direction(&short), PalmDirection::Neutral);
        assert!(!detect_fist(&short));
        assert!(!detect_open_hand(&short));
        assert_eq!(classify_pose(&[]), None);
    }

    #[test]
    fn test_fist_ignores_thumb() {
        assert!(detect_fist(&make_hand([true; 4], true)));
        assert!(detect_fist(&make_hand([true; 4], false)));
        assert!(!detect_fist(&make_hand([true, true, true, false], true)));
    }

    #[test]
    fn test_open_hand() {
        let hand = make_hand([false; 4], false);
        assert!(detect_open_hand(&hand));
        assert_eq!(classify_pose(&hand), Some(Pose::OpenHand));
        assert!(!detect_open_hand(&make_hand([false; 4], true)));
    }

    #[test]
    fn test_v_sign_ignores_thumb() {
        assert!(detect_v_sign(&make_hand([false, false, true, true], false)));
        assert!(detect_v_sign(&make_hand([false, false, true, true], true)));
        assert!(!detect_v_sign(&make_hand([true, false, true, true], false)));
        assert_eq!(
            classify_pose(&make_hand([false, false, true, true], true)),
            Some(Pose::VSign)
        );
    }

    #[test]
    fn test_palm_facing_camera_is_not_sideways() {
        let hand = make_hand([true; 4], false);
        assert_eq!(detect_palm_direction(&hand), PalmDirection::Forward);
        assert!(!detect_thumbs_up(&hand));
        assert_eq!(classify_pose(&hand), Some(Pose::Fist));
    }

    #[test]
    fn test_mirrored_hand_flips_palm_direction() {
        let hand = make_hand([false; 4], false);
        let wrist = hand[WRIST];
        let mirrored: Vec<Landmark> = hand
            .iter()
            .map(|p| Landmark::new(2.0 * wrist.x - p.x, p.y, p.z))
            .collect();
        assert_eq!(detect_palm_direction(&hand), PalmDirection::Forward);
        assert_eq!(detect_palm_direction(&mirrored), PalmDirection::Backward);
    }

    #[test]
    fn test_thumbs_up_needs_sideways_palm() {
        let upright = make_hand([true; 4], false);
        let sideways = turn_sideways(&upright);
        assert!(detect_palm_direction(&sideways).is_sideways());
        assert!(detect_thumbs_up(&sideways));
        assert_eq!(classify_pose(&sideways), Some(Pose::ThumbsUp));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Pose::ThumbsUp.as_str(), "thumbs-up");
        assert_eq!(PalmDirection::Forward.as_str(), "forward");
    }
}
