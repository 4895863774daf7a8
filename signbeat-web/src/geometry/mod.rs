//! Geometry module - landmark types, tracking frames, vector math, normalization
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod landmark;
pub mod normalize;
pub mod vector;

pub use frame::{HandFrame, TrackedHand, FLOATS_PER_HAND};
pub use landmark::*;
pub use normalize::{flatten, normalize_hand, normalize_to_unit_range, unflatten};
