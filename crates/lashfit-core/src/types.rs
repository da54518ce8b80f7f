use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single normalized face-mesh landmark coordinate.
///
/// Both components are conceptually in [0, 1] (image-relative), but the range
/// is not enforced; the pipeline only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

/// Fixed-index landmark collection as produced by the upstream face-mesh
/// model. The pipeline reads by index and never mutates it.
pub type LandmarkMap = HashMap<u32, LandmarkPoint>;

/// Which eye of the face to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Derived geometric features of one eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeFeatures {
    /// Vertical opening divided by horizontal width; always >= 0.
    pub open_ratio: f32,
    /// Signed vertical displacement between outer and inner corner.
    /// Image-space y grows downward, so negative means the outer corner
    /// sits higher on screen than the inner corner.
    pub tilt_angle: f32,
}

/// Classified eye shape. Closed set: the classifier always produces exactly
/// one of these five categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeShape {
    Monolid,
    Round,
    Downturned,
    Upturned,
    Almond,
}

impl EyeShape {
    pub const ALL: [EyeShape; 5] = [
        EyeShape::Monolid,
        EyeShape::Round,
        EyeShape::Downturned,
        EyeShape::Upturned,
        EyeShape::Almond,
    ];

    /// Stable string code used on the wire and in the degraded lookup path.
    pub fn code(self) -> &'static str {
        match self {
            EyeShape::Monolid => "monolid",
            EyeShape::Round => "round",
            EyeShape::Downturned => "downturned",
            EyeShape::Upturned => "upturned",
            EyeShape::Almond => "almond",
        }
    }

    /// Parse a shape code. Returns `None` for anything outside the closed set.
    pub fn from_code(code: &str) -> Option<EyeShape> {
        EyeShape::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for EyeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Styling guidance for one eye shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub style: String,
    pub mapping: String,
    pub curl: String,
    pub length: String,
    pub notes: String,
}

/// Single-eye analysis result. Float fields are rounded to 4 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct EyeAnalysis {
    pub eye_shape: EyeShape,
    pub open_ratio: f32,
    pub tilt_angle: f32,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Both-eyes analysis result with the combined recommendation.
/// Float fields are rounded to 4 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct FaceAnalysis {
    pub left_eye_shape: EyeShape,
    pub right_eye_shape: EyeShape,
    pub left_open_ratio: f32,
    pub right_open_ratio: f32,
    pub left_tilt_angle: f32,
    pub right_tilt_angle: f32,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}
