//! Eye-shape classification from geometric features.
//!
//! A first-match-wins rule chain over the openness ratio and corner tilt.
//! Total over all inputs: every feature pair maps to exactly one shape.

use crate::types::{EyeFeatures, EyeShape};

// --- Classification thresholds (no magic numbers) ---
/// Openness below which a lid reads as narrow.
pub const NARROW_OPEN_RATIO: f32 = 0.25;
/// Openness above which an eye reads as wide open.
pub const WIDE_OPEN_RATIO: f32 = 0.4;
/// Corner tilt below which the outer corner reads as dropped.
pub const DOWNWARD_TILT: f32 = -0.1;
/// Corner tilt above which the outer corner reads as lifted.
pub const UPWARD_TILT: f32 = 0.1;

/// Classify an eye from its openness ratio and corner tilt.
///
/// The two-feature rules come first: they are strictly more specific than
/// the tilt-only rules and would be shadowed behind them. All comparisons
/// are strict, so a value sitting exactly on a threshold falls through to
/// the later rules.
pub fn classify(features: EyeFeatures) -> EyeShape {
    let EyeFeatures {
        open_ratio,
        tilt_angle,
    } = features;

    if open_ratio < NARROW_OPEN_RATIO && tilt_angle < DOWNWARD_TILT {
        EyeShape::Monolid
    } else if open_ratio > WIDE_OPEN_RATIO && tilt_angle > UPWARD_TILT {
        EyeShape::Round
    } else if tilt_angle < DOWNWARD_TILT {
        EyeShape::Downturned
    } else if tilt_angle > UPWARD_TILT {
        EyeShape::Upturned
    } else {
        EyeShape::Almond
    }
}
