//! Geometric models used by the plane detector.
//!
//! A [`Plane`] is stored in implicit form `a·x + b·y + c·z + d = 0` with an
//! unnormalised normal `(a, b, c)`. Distances are normalised by the normal's
//! length at evaluation time.

use nalgebra::Vector3;

use crate::types::{Point, PointCloud};

/// Plane `a·x + b·y + c·z + d = 0`.
///
/// The all-zero plane is the degenerate sentinel: its normal has no length,
/// so it contains no point at any tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through three points.
    ///
    /// The normal is the cross product of the edges `p0→p1` and `p0→p2` and is
    /// not normalised. Collinear or repeated points produce a degenerate plane.
    pub fn from_points(p0: &Point, p1: &Point, p2: &Point) -> Self {
        let normal = (p1 - p0).cross(&(p2 - p0));
        let d = -normal.dot(&p0.coords);
        Self::new(normal.x, normal.y, normal.z, d)
    }

    pub fn normal(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// True when the normal vector has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.normal().norm_squared() == 0.0
    }

    /// Euclidean distance from `point` to the plane.
    ///
    /// Returns `f64::INFINITY` for a degenerate plane instead of dividing by
    /// zero, so callers counting points within a tolerance get zero support.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let norm = self.normal().norm();
        if norm == 0.0 {
            return f64::INFINITY;
        }
        (self.normal().dot(&point.coords) + self.d).abs() / norm
    }

    /// Whether `point` lies strictly closer than `threshold` to the plane.
    pub fn contains(&self, point: &Point, threshold: f64) -> bool {
        self.distance_to_point(point) < threshold
    }
}

/// A candidate plane paired with its support count.
///
/// The default value is the reducer's sentinel: the degenerate plane with
/// support 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoredPlane {
    pub plane: Plane,
    pub support: usize,
}

impl ScoredPlane {
    pub fn new(plane: Plane, support: usize) -> Self {
        Self { plane, support }
    }
}

/// A dominant plane found in one round, with the points that support it.
#[derive(Clone, Debug)]
pub struct DominantPlane {
    pub scored: ScoredPlane,
    pub inliers: PointCloud,
}

impl DominantPlane {
    pub fn plane(&self) -> &Plane {
        &self.scored.plane
    }

    pub fn support(&self) -> usize {
        self.scored.support
    }
}

/// Result of a multi-plane detection run.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Dominant planes in the order they were extracted.
    pub planes: Vec<DominantPlane>,
    /// Points left after every dominant plane's inliers were removed.
    pub remainder: PointCloud,
    /// RANSAC iterations used for each round.
    pub iterations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triplet_points_lie_on_their_plane() {
        let triplets = [
            [
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            [
                Point::new(1.5, -2.0, 3.25),
                Point::new(-4.0, 0.5, 2.0),
                Point::new(0.75, 6.0, -1.0),
            ],
            [
                Point::new(100.0, 200.0, 300.0),
                Point::new(101.0, 199.0, 310.0),
                Point::new(95.0, 205.0, 290.0),
            ],
        ];

        for [p0, p1, p2] in triplets {
            let plane = Plane::from_points(&p0, &p1, &p2);
            assert!(!plane.is_degenerate());
            for p in [p0, p1, p2] {
                let d = plane.distance_to_point(&p);
                assert!(d < 1e-9, "point {:?} is {} away from its own plane", p, d);
            }
        }
    }

    #[test]
    fn distance_matches_closed_form_for_unnormalised_plane() {
        // 2z - 4 = 0, i.e. z = 2
        let plane = Plane::new(0.0, 0.0, 2.0, -4.0);
        let d = plane.distance_to_point(&Point::new(3.0, -7.0, 5.0));
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_never_negative() {
        let planes = [
            Plane::new(1.0, 2.0, 3.0, 4.0),
            Plane::new(-1.0, 0.5, 0.0, -10.0),
            Plane::new(0.0, 0.0, -1.0, 0.0),
            Plane::default(),
        ];
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(-5.0, 3.0, 9.0),
            Point::new(1e6, -1e6, 2.5),
        ];
        for plane in &planes {
            for p in &points {
                assert!(plane.distance_to_point(p) >= 0.0);
            }
        }
    }

    #[test]
    fn collinear_points_give_degenerate_plane() {
        let plane = Plane::from_points(
            &Point::new(0.0, 0.0, 0.0),
            &Point::new(1.0, 1.0, 1.0),
            &Point::new(2.0, 2.0, 2.0),
        );
        assert!(plane.is_degenerate());
        assert_eq!(
            plane.distance_to_point(&Point::new(1.0, 1.0, 1.0)),
            f64::INFINITY
        );
        assert!(!plane.contains(&Point::new(0.0, 0.0, 0.0), 1e9));
    }

    #[test]
    fn repeated_point_gives_degenerate_plane() {
        let p = Point::new(3.0, 4.0, 5.0);
        let plane = Plane::from_points(&p, &p, &Point::new(0.0, 1.0, 0.0));
        assert!(plane.is_degenerate());
    }

    #[test]
    fn sentinel_scored_plane_is_degenerate_with_zero_support() {
        let sentinel = ScoredPlane::default();
        assert_eq!(sentinel.support, 0);
        assert!(sentinel.plane.is_degenerate());
    }
}
