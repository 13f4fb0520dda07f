//! High-level Rust API for plane detection.
//!
//! This module provides one-call functions on top of
//! [`DominantPlaneDetector`](crate::detector::DominantPlaneDetector).

use crate::detector::DominantPlaneDetector;
use crate::error::Result;
use crate::models::{Detection, DominantPlane};
use crate::settings::RansacSettings;
use crate::types::Point;

/// Find the single dominant plane of `cloud`.
///
/// # Arguments
/// * `cloud` - Input points
/// * `settings` - RANSAC settings; `plane_count` is ignored
///
/// # Returns
/// The best-supported plane and its inliers.
///
/// # Example
/// ```
/// use plane_ransac::api::find_dominant_plane;
/// use plane_ransac::settings::RansacSettings;
/// use plane_ransac::types::Point;
///
/// let mut cloud = Vec::new();
/// for i in 0..6 {
///     for j in 0..6 {
///         cloud.push(Point::new(i as f64, j as f64, 1.0));
///     }
/// }
/// cloud.push(Point::new(0.5, 0.5, 4.0));
///
/// let settings = RansacSettings {
///     inlier_threshold: 0.1,
///     inlier_ratio: 0.5,
///     seed: Some(7),
///     ..Default::default()
/// };
/// let found = find_dominant_plane(&cloud, &settings).unwrap();
/// assert_eq!(found.support(), 36);
/// ```
pub fn find_dominant_plane(cloud: &[Point], settings: &RansacSettings) -> Result<DominantPlane> {
    let mut detector = DominantPlaneDetector::new(settings)?;
    detector.find_plane(cloud)
}

/// Extract `settings.plane_count` dominant planes from `cloud`.
///
/// # Returns
/// The planes in extraction order and the residual cloud.
pub fn detect_dominant_planes(cloud: &[Point], settings: &RansacSettings) -> Result<Detection> {
    let mut detector = DominantPlaneDetector::new(settings)?;
    detector.detect(cloud.to_vec())
}
