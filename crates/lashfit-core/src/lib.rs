//! lashfit-core — Eye-shape analysis and lash-styling recommendation engine.
//!
//! Derives per-eye geometric features from fixed-index face-mesh landmarks,
//! classifies the eye shape via ordered thresholds, and maps each shape to a
//! styling recommendation record.

pub mod analyzer;
pub mod catalog;
pub mod classifier;
pub mod geometry;
pub mod merger;
pub mod types;

pub use analyzer::{analyze_eye, analyze_face, AnalysisError};
pub use geometry::{extract, GeometryError};
pub use types::{
    EyeAnalysis, EyeFeatures, EyeShape, FaceAnalysis, LandmarkMap, LandmarkPoint, Recommendation,
    Side,
};
