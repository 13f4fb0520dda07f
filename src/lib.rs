//! # plane-ransac - Dominant plane detection with a concurrent RANSAC pipeline
//!
//! `plane_ransac` finds the planes containing the most points of an unordered
//! 3D point cloud. Each RANSAC round runs as a chain of concurrently scheduled
//! stages connected by channels:
//!
//! 1. a sampling thread draws random points from the cloud, forever;
//! 2. a batcher groups them into triplets;
//! 3. a limiter forwards exactly `N` triplets and abandons the rest;
//! 4. an estimator turns each triplet into a candidate plane;
//! 5. one scoring task per candidate counts the points within ε of it;
//! 6. a fan-in merges the `N` scores into one stream;
//! 7. a single reducer keeps the best-supported plane.
//!
//! The [`detector`] repeats a round `K` times, removing each dominant plane's
//! inliers from the cloud before the next one.
//!
//! ## Quick Start
//!
//! ```rust
//! use plane_ransac::{detect_dominant_planes, RansacSettings};
//! use plane_ransac::types::Point;
//!
//! // Two horizontal layers of points.
//! let mut cloud = Vec::new();
//! for i in 0..8 {
//!     for j in 0..8 {
//!         cloud.push(Point::new(i as f64, j as f64, 0.0));
//!         if i < 5 && j < 5 {
//!             cloud.push(Point::new(i as f64, j as f64, 3.0));
//!         }
//!     }
//! }
//!
//! let settings = RansacSettings {
//!     inlier_threshold: 0.1,
//!     inlier_ratio: 0.3,
//!     plane_count: 2,
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let detection = detect_dominant_planes(&cloud, &settings).unwrap();
//! assert_eq!(detection.planes[0].support(), 64);
//! assert_eq!(detection.planes[1].support(), 25);
//! assert!(detection.remainder.is_empty());
//! ```
//!
//! ## Extending the Library
//!
//! The pipeline is generic over three traits from [`core`]:
//!
//! - **[`Sampler`](core::Sampler)**: source of random indices
//! - **[`Estimator`](core::Estimator)**: triplet → model hypothesis
//! - **[`Scoring<M>`](core::Scoring)**: support of a hypothesis
//!
//! ## Modules
//!
//! - **[`api`]**: one-call entry points
//! - **[`core`]**: pipeline traits and the iteration-count formula
//! - **[`detector`]**: multi-plane driver
//! - **[`pipeline`]**: the concurrent stages of one round
//! - **[`models`]**: planes, scored planes and detection results
//! - **[`scoring`]**: support counting and inlier extraction
//! - **[`settings`]**: configuration
//! - **[`io`]**: XYZ file reader and writer

pub mod api;
pub mod core;
pub mod detector;
pub mod error;
pub mod estimators;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{detect_dominant_planes, find_dominant_plane};

// Re-export core traits for easy access
pub use core::{number_of_iterations, Estimator, Sampler, Scoring};

pub use detector::DominantPlaneDetector;
pub use error::{Error, Result};
pub use models::{Detection, DominantPlane, Plane, ScoredPlane};
pub use scoring::{remove_plane, support, supporting_points};
pub use settings::RansacSettings;
