//! Core shared types for plane detection.
//!
//! Points are plain `nalgebra` points; a cloud is an ordered `Vec` of them.
//! Order carries no meaning for the algorithm but is preserved so that output
//! files list points in input order.

use nalgebra::Point3;

/// A 3D point `(x, y, z)`.
pub type Point = Point3<f64>;

/// An owned point cloud.
pub type PointCloud = Vec<Point>;

/// Three points drawn independently from a cloud, the minimal sample of a plane.
pub type Triplet = [Point; 3];
