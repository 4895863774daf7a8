//! 3D vector helpers over landmarks
//!
//! Landmarks double as vectors here. Arithmetic goes through
//! `nalgebra::Vector3` so the cross/dot products match the rest of the math.

use nalgebra::Vector3;

use super::landmark::Landmark;

impl From<Landmark> for Vector3<f32> {
    fn from(p: Landmark) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f32>> for Landmark {
    fn from(v: Vector3<f32>) -> Self {
        Landmark::new(v.x, v.y, v.z)
    }
}

/// Euclidean distance between two points
pub fn distance(a: Landmark, b: Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

pub fn dot_product(a: Landmark, b: Landmark) -> f32 {
    Vector3::from(a).dot(&Vector3::from(b))
}

pub fn magnitude(v: Landmark) -> f32 {
    Vector3::from(v).norm()
}

/// Unit vector in the direction of `v`; the zero vector stays zero
pub fn normalize(v: Landmark) -> Landmark {
    let mag = magnitude(v);
    if mag == 0.0 {
        return Landmark::ORIGIN;
    }
    Landmark::new(v.x / mag, v.y / mag, v.z / mag)
}

/// Angle between two vectors in radians
///
/// Returns 0 when either vector has zero length.
pub fn angle_between(a: Landmark, b: Landmark) -> f32 {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    let cos_angle = (dot_product(a, b) / (mag_a * mag_b)).clamp(-1.0, 1.0);
    cos_angle.acos()
}

/// Vector pointing from `from` to `to`
pub fn vector_between(from: Landmark, to: Landmark) -> Landmark {
    Landmark::new(to.x - from.x, to.y - from.y, to.z - from.z)
}

pub fn cross(a: Landmark, b: Landmark) -> Landmark {
    Vector3::from(a).cross(&Vector3::from(b)).into()
}

/// Component-wise mean; empty input yields the origin
pub fn average(points: &[Landmark]) -> Landmark {
    if points.is_empty() {
        return Landmark::ORIGIN;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f32>, p| acc + Vector3::from(*p));
    (sum / points.len() as f32).into()
}
