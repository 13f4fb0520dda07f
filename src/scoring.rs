//! Support scoring and inlier extraction for planes.
//!
//! A point supports a plane when its distance to the plane is strictly below
//! the inlier threshold ε. The same predicate drives scoring, inlier
//! extraction and removal, so the three always agree.

use crate::core::Scoring;
use crate::models::Plane;
use crate::types::{Point, PointCloud};

/// RANSAC-style scoring that counts points within the inlier threshold.
#[derive(Debug, Clone, Copy)]
pub struct PlaneSupportScoring {
    threshold: f64,
}

impl PlaneSupportScoring {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Scoring<Plane> for PlaneSupportScoring {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn score(&self, cloud: &[Point], model: &Plane) -> usize {
        support(model, cloud, self.threshold)
    }
}

/// Number of points of `cloud` within `threshold` of `plane`.
///
/// A degenerate plane has zero support.
pub fn support(plane: &Plane, cloud: &[Point], threshold: f64) -> usize {
    if plane.is_degenerate() {
        return 0;
    }
    cloud
        .iter()
        .filter(|p| plane.contains(p, threshold))
        .count()
}

/// Points of `cloud` that support `plane`, in cloud order.
pub fn supporting_points(plane: &Plane, cloud: &[Point], threshold: f64) -> PointCloud {
    cloud
        .iter()
        .filter(|p| plane.contains(p, threshold))
        .copied()
        .collect()
}

/// Points of `cloud` that do not support `plane`, in cloud order.
///
/// Complement of [`supporting_points`]: points at exactly `threshold` are kept
/// here, so no point is lost between the two.
pub fn remove_plane(plane: &Plane, cloud: &[Point], threshold: f64) -> PointCloud {
    cloud
        .iter()
        .filter(|p| !plane.contains(p, threshold))
        .copied()
        .collect()
}

/// Split `cloud` into `(inliers, remainder)` in a single pass.
pub fn partition(plane: &Plane, cloud: &[Point], threshold: f64) -> (PointCloud, PointCloud) {
    cloud
        .iter()
        .copied()
        .partition(|p| plane.contains(p, threshold))
}
