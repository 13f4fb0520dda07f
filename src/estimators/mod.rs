//! Estimators for geometric models.
//!
//! Only planes are estimated at the moment; the [`Estimator`](crate::core::Estimator)
//! trait keeps the pipeline stage independent of the model.

pub mod plane;

pub use plane::PlaneEstimator;
