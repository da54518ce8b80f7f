//! Analysis orchestration — extraction, classification, response assembly.
//!
//! Runs the per-eye pipeline and assembles the wire-facing result records,
//! rounding every float field to 4 decimal places.

use crate::geometry::GeometryError;
use crate::types::{EyeAnalysis, FaceAnalysis, LandmarkMap, Side};
use crate::{catalog, classifier, geometry, merger};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Upstream detection produced no landmarks at all.
    #[error("no face landmarks detected")]
    NoLandmarks,
    /// A required landmark index is absent from the collection.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Round a wire-facing float to 4 decimal places, ties away from zero.
fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

/// Analyze a single eye: geometric features, shape, and the shape's
/// styling recommendation.
pub fn analyze_eye(landmarks: &LandmarkMap, side: Side) -> Result<EyeAnalysis, AnalysisError> {
    if landmarks.is_empty() {
        return Err(AnalysisError::NoLandmarks);
    }

    let features = geometry::extract(landmarks, side)?;
    let shape = classifier::classify(features);
    tracing::debug!(
        %side,
        open_ratio = features.open_ratio,
        tilt_angle = features.tilt_angle,
        shape = %shape,
        "eye classified"
    );

    Ok(EyeAnalysis {
        eye_shape: shape,
        open_ratio: round4(features.open_ratio),
        tilt_angle: round4(features.tilt_angle),
        recommendation: catalog::lookup(shape).clone(),
    })
}

/// Analyze both eyes and attach the combined recommendation.
pub fn analyze_face(landmarks: &LandmarkMap) -> Result<FaceAnalysis, AnalysisError> {
    if landmarks.is_empty() {
        return Err(AnalysisError::NoLandmarks);
    }

    let left = geometry::extract(landmarks, Side::Left)?;
    let right = geometry::extract(landmarks, Side::Right)?;
    let left_shape = classifier::classify(left);
    let right_shape = classifier::classify(right);
    tracing::debug!(left = %left_shape, right = %right_shape, "face classified");

    Ok(FaceAnalysis {
        left_eye_shape: left_shape,
        right_eye_shape: right_shape,
        left_open_ratio: round4(left.open_ratio),
        right_open_ratio: round4(right.open_ratio),
        left_tilt_angle: round4(left.tilt_angle),
        right_tilt_angle: round4(right.tilt_angle),
        recommendation: merger::merge(left_shape, right_shape),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EyeShape, LandmarkPoint};

    fn make_map(points: &[(u32, f32, f32)]) -> LandmarkMap {
        points
            .iter()
            .map(|&(i, x, y)| (i, LandmarkPoint { x, y }))
            .collect()
    }

    /// Level almond-shaped left eye plus a wide, lifted right eye.
    fn mixed_face() -> LandmarkMap {
        make_map(&[
            // Left: opening 0.1 over width 0.2 → ratio 0.5, tilt 0 → almond.
            (159, 0.0, 0.30),
            (145, 0.0, 0.40),
            (133, 0.30, 0.20),
            (33, 0.10, 0.20),
            // Right: opening 0.3 over width 0.2 → ratio 1.5, tilt 0.15 → round.
            (386, 0.5, 0.10),
            (374, 0.5, 0.40),
            (362, 0.60, 0.20),
            (263, 0.80, 0.35),
        ])
    }

    #[test]
    fn test_round4_behavior() {
        assert_eq!(round4(0.123_456), 0.1235);
        assert_eq!(round4(-0.123_44), -0.1234);
        assert_eq!(round4(0.5), 0.5);
        assert_eq!(round4(0.0), 0.0);
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(2.0 / 3.0), 0.6667);
    }

    #[test]
    fn test_single_eye_analysis() {
        let map = mixed_face();
        let analysis = analyze_eye(&map, Side::Left).unwrap();
        assert_eq!(analysis.eye_shape, EyeShape::Almond);
        assert_eq!(analysis.open_ratio, 0.5);
        assert_eq!(analysis.tilt_angle, 0.0);
        assert_eq!(&analysis.recommendation, catalog::lookup(EyeShape::Almond));
    }

    #[test]
    fn test_single_eye_output_shape() {
        let map = mixed_face();
        let analysis = analyze_eye(&map, Side::Left).unwrap();
        let value = serde_json::to_value(&analysis).unwrap();
        // Recommendation fields are flattened into the record.
        assert_eq!(value["eye_shape"], "almond");
        assert_eq!(value["open_ratio"], 0.5);
        assert_eq!(value["style"], "Beliebig");
        assert_eq!(value["curl"], "C / CC");
        assert!(value.get("recommendation").is_none());
    }

    #[test]
    fn test_face_analysis_merges_mixed_shapes() {
        let map = mixed_face();
        let analysis = analyze_face(&map).unwrap();
        assert_eq!(analysis.left_eye_shape, EyeShape::Almond);
        assert_eq!(analysis.right_eye_shape, EyeShape::Round);
        assert_eq!(analysis.left_open_ratio, 0.5);
        assert_eq!(analysis.right_open_ratio, 1.5);
        assert_eq!(analysis.left_tilt_angle, 0.0);
        assert_eq!(analysis.right_tilt_angle, 0.15);
        assert_eq!(analysis.recommendation.style, "Beliebig / Cat / Squirrel");
        assert_eq!(analysis.recommendation.curl, "C / CC / C / D");
    }

    #[test]
    fn test_face_analysis_matching_shapes_single_record() {
        // Mirror the left eye onto the right index slots; both classify almond.
        let map = make_map(&[
            (159, 0.0, 0.30),
            (145, 0.0, 0.40),
            (133, 0.30, 0.20),
            (33, 0.10, 0.20),
            (386, 0.5, 0.30),
            (374, 0.5, 0.40),
            (362, 0.60, 0.20),
            (263, 0.80, 0.20),
        ]);
        let analysis = analyze_face(&map).unwrap();
        assert_eq!(analysis.left_eye_shape, analysis.right_eye_shape);
        assert_eq!(&analysis.recommendation, catalog::lookup(EyeShape::Almond));
    }

    #[test]
    fn test_empty_landmarks_is_a_distinct_error() {
        let empty = LandmarkMap::new();
        assert!(matches!(
            analyze_eye(&empty, Side::Left),
            Err(AnalysisError::NoLandmarks)
        ));
        assert!(matches!(analyze_face(&empty), Err(AnalysisError::NoLandmarks)));
    }

    #[test]
    fn test_missing_index_propagates_as_geometry_error() {
        let mut map = mixed_face();
        map.remove(&386);
        let err = analyze_face(&map).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Geometry(GeometryError::MissingLandmark { index: 386, .. })
        ));
    }

    #[test]
    fn test_face_output_shape() {
        let map = mixed_face();
        let value = serde_json::to_value(analyze_face(&map).unwrap()).unwrap();
        assert_eq!(value["left_eye_shape"], "almond");
        assert_eq!(value["right_eye_shape"], "round");
        assert_eq!(value["left_open_ratio"], 0.5);
        assert_eq!(value["style"], "Beliebig / Cat / Squirrel");
        assert!(value.get("recommendation").is_none());
    }
}
