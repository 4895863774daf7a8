//! Landmark normalization
//!
//! `normalize_hand` removes hand position and camera distance so two hands
//! making the same shape produce the same point set:
//! 1. translate so the wrist sits at the origin
//! 2. scale so the wrist→middle-fingertip length is 1.0
//!
//! `normalize_to_unit_range` is the display variant (per-axis min-max).

use super::landmark::{Landmark, MIDDLE_TIP, WRIST};
use super::vector::{magnitude, vector_between};

/// Translate to the wrist and scale by the wrist→middle-tip length.
///
/// A zero reference length leaves the points translated only. Input too short
/// to contain the middle fingertip is translated only as well.
pub fn normalize_hand(landmarks: &[Landmark]) -> Vec<Landmark> {
    let Some(&wrist) = landmarks.get(WRIST) else {
        return Vec::new();
    };

    let translated: Vec<Landmark> = landmarks
        .iter()
        .map(|p| vector_between(wrist, *p))
        .collect();

    let hand_size = match translated.get(MIDDLE_TIP) {
        Some(tip) => magnitude(*tip),
        None => return translated,
    };
    if hand_size == 0.0 {
        return translated;
    }

    translated
        .into_iter()
        .map(|p| Landmark::new(p.x / hand_size, p.y / hand_size, p.z / hand_size))
        .collect()
}

/// Rescale each axis independently into [0, 1] using the set's bounding box.
///
/// An axis with zero extent uses a range of 1, so flat axes map to 0.
pub fn normalize_to_unit_range(landmarks: &[Landmark]) -> Vec<Landmark> {
    if landmarks.is_empty() {
        return Vec::new();
    }

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for p in landmarks {
        for (axis, value) in [p.x, p.y, p.z].into_iter().enumerate() {
            min[axis] = min[axis].min(value);
            max[axis] = max[axis].max(value);
        }
    }

    let range = |axis: usize| {
        let r = max[axis] - min[axis];
        if r == 0.0 { 1.0 } else { r }
    };
    let (rx, ry, rz) = (range(0), range(1), range(2));

    landmarks
        .iter()
        .map(|p| Landmark::new((p.x - min[0]) / rx, (p.y - min[1]) / ry, (p.z - min[2]) / rz))
        .collect()
}

/// Flatten points into `[x0, y0, z0, x1, y1, z1, ...]`
pub fn flatten(landmarks: &[Landmark]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(landmarks.len() * 3);
    for p in landmarks {
        flat.extend_from_slice(&[p.x, p.y, p.z]);
    }
    flat
}

/// Inverse of [`flatten`]. A trailing partial triple is dropped.
pub fn unflatten(values: &[f32]) -> Vec<Landmark> {
    values
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect()
}
