//! Frame boundary - tracker data from JS into a `HandFrame`
//!
//! Per-frame data never throws to JS. A malformed frame is logged and treated
//! as a frame with no hands.

use log::warn;

use crate::geometry::{HandFrame, FLOATS_PER_HAND};

/// Parse a flat `Float32Array` (`hands × 21 × 3`) with comma-separated labels
pub fn parse_frame(flat: &[f32], handedness: &str) -> HandFrame {
    let num_hands = flat.len().div_ceil(FLOATS_PER_HAND);
    match HandFrame::from_flat(flat, num_hands, handedness) {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Dropping hand frame: {e}");
            HandFrame::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::Handedness;

    #[test]
    fn test_parse_frame_counts_hands() {
        let frame = parse_frame(&[0.5; FLOATS_PER_HAND * 2], "Right,Left");
        assert_eq!(frame.hands.len(), 2);
        assert_eq!(frame.hands[0].handedness, Handedness::Right);
    }

    #[test]
    fn test_partial_hand_degrades_to_empty() {
        assert!(parse_frame(&[0.5; FLOATS_PER_HAND + 5], "Right").is_empty());
    }

    #[test]
    fn test_bad_label_degrades_to_empty() {
        assert!(parse_frame(&[0.5; FLOATS_PER_HAND], "Up").is_empty());
    }

    #[test]
    fn test_no_data_is_empty() {
        assert!(parse_frame(&[], "").is_empty());
    }
}
