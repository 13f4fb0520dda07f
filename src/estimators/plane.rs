//! Plane estimator for 3D plane fitting.

use crate::core::Estimator;
use crate::models::Plane;
use crate::types::Triplet;

/// Plane estimator for 3D plane fitting.
///
/// Estimates planes in the form ax + by + cz + d = 0 from three points. The
/// normal is left unnormalised; [`Plane::distance_to_point`] normalises at
/// evaluation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaneEstimator;

impl PlaneEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for PlaneEstimator {
    type Model = Plane;

    fn estimate_model(&self, sample: &Triplet) -> Self::Model {
        let [p0, p1, p2] = sample;
        Plane::from_points(p0, p1, p2)
    }
}
