//! Similarity metrics between landmark sets
//!
//! All scores are in [0, 1] except the raw cosine, which keeps its sign so the
//! DTW cost `1 - cos` stays a proper distance. Mismatched lengths and
//! zero-magnitude inputs score 0 instead of failing.

use serde::{Deserialize, Serialize};

use crate::geometry::{flatten, Landmark};

/// Weights for the hybrid score
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub cosine: f32,
    pub euclidean: f32,
}

impl SimilarityWeights {
    pub const fn new(cosine: f32, euclidean: f32) -> Self {
        Self { cosine, euclidean }
    }
}

impl Default for SimilarityWeights {
    /// Cosine dominates: after normalization the remaining signal is mostly
    /// joint angles, which cosine captures directly.
    fn default() -> Self {
        Self::new(0.6, 0.4)
    }
}

/// Cosine similarity of the flattened point sets
pub fn cosine_similarity(a: &[Landmark], b: &[Landmark]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let va = flatten(a);
    let vb = flatten(b);

    let mut dot = 0.0f32;
    let mut mag_a = 0.0f32;
    let mut mag_b = 0.0f32;
    for (x, y) in va.iter().zip(vb.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let mag_a = mag_a.sqrt();
    let mag_b = mag_b.sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}

/// Distance-based similarity: `max(0, 1 - d / sqrt(3 * n))`
///
/// `sqrt(3 * n)` is the distance bound for coordinates in [0, 1]. It is loose
/// for normalized hands, so scores here run high.
pub fn euclidean_similarity(a: &[Landmark], b: &[Landmark]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let sum_squared: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| {
            let dx = p.x - q.x;
            let dy = p.y - q.y;
            let dz = p.z - q.z;
            dx * dx + dy * dy + dz * dz
        })
        .sum();

    let max_distance = (3.0 * a.len() as f32).sqrt();
    let score = 1.0 - sum_squared.sqrt() / max_distance;
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Weighted cosine + Euclidean score, clamped to [0, 1]
pub fn hybrid_similarity(a: &[Landmark], b: &[Landmark], weights: SimilarityWeights) -> f32 {
    let cosine = cosine_similarity(a, b);
    let euclidean = euclidean_similarity(a, b);
    let score = cosine * weights.cosine + euclidean * weights.euclidean;
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Dynamic time warping distance between two pose sequences.
///
/// Step cost is `1 - cosine_similarity`. O(n·m) time and memory. Not used by
/// the live single-frame path.
pub fn dtw_distance<A, B>(seq1: &[A], seq2: &[B]) -> f32
where
    A: AsRef<[Landmark]>,
    B: AsRef<[Landmark]>,
{
    let n = seq1.len();
    let m = seq2.len();
    let width = m + 1;

    let mut dtw = vec![f32::INFINITY; (n + 1) * width];
    dtw[0] = 0.0;

    for i in 1..=n {
        for j in 1..=m {
            let cost = 1.0 - cosine_similarity(seq1[i - 1].as_ref(), seq2[j - 1].as_ref());
            let best_prev = dtw[(i - 1) * width + j]     // insertion
                .min(dtw[i * width + j - 1])             // deletion
                .min(dtw[(i - 1) * width + j - 1]);      // match
            dtw[i * width + j] = cost + best_prev;
        }
    }

    dtw[n * width + m]
}
