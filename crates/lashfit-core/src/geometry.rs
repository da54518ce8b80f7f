//! Eye geometry — feature extraction from fixed-index face-mesh landmarks.
//!
//! Selects the four named points of one eye (top, bottom, inner corner,
//! outer corner) out of the upstream landmark collection and reduces them to
//! an openness ratio and a corner tilt.

use crate::types::{EyeFeatures, LandmarkMap, LandmarkPoint, Side};
use thiserror::Error;

/// Face-mesh indices of the four named points of one eye.
///
/// The values are fixed by the upstream 468-point face-mesh topology and
/// must only change together with the landmark model.
#[derive(Debug, Clone, Copy)]
pub struct EyeIndices {
    pub top: u32,
    pub bottom: u32,
    pub inner: u32,
    pub outer: u32,
}

const LEFT_EYE: EyeIndices = EyeIndices {
    top: 159,
    bottom: 145,
    inner: 133,
    outer: 33,
};

const RIGHT_EYE: EyeIndices = EyeIndices {
    top: 386,
    bottom: 374,
    inner: 362,
    outer: 263,
};

impl Side {
    /// Landmark index table for this eye.
    pub fn indices(self) -> &'static EyeIndices {
        match self {
            Side::Left => &LEFT_EYE,
            Side::Right => &RIGHT_EYE,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeometryError {
    #[error("landmark {index} missing for {side} eye — upstream face mesh must provide it")]
    MissingLandmark { index: u32, side: Side },
}

/// Derive the openness ratio and corner tilt for one eye.
///
/// Pure lookup-and-arithmetic over the side's fixed landmark indices. A
/// zero-width eye (outer.x == inner.x) yields an openness of 0 rather than a
/// division error; it is a degenerate but valid result.
pub fn extract(landmarks: &LandmarkMap, side: Side) -> Result<EyeFeatures, GeometryError> {
    let idx = side.indices();
    let top = point(landmarks, idx.top, side)?;
    let bottom = point(landmarks, idx.bottom, side)?;
    let inner = point(landmarks, idx.inner, side)?;
    let outer = point(landmarks, idx.outer, side)?;

    let opening = (top.y - bottom.y).abs();
    let width = (outer.x - inner.x).abs();

    let open_ratio = if width == 0.0 {
        tracing::debug!(%side, "zero-width eye, openness ratio defined as 0");
        0.0
    } else {
        opening / width
    };

    let tilt_angle = outer.y - inner.y;

    Ok(EyeFeatures {
        open_ratio,
        tilt_angle,
    })
}

fn point(landmarks: &LandmarkMap, index: u32, side: Side) -> Result<LandmarkPoint, GeometryError> {
    landmarks
        .get(&index)
        .copied()
        .ok_or(GeometryError::MissingLandmark { index, side })
}
