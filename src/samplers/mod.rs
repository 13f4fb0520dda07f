//! Sampling strategies for the plane detector.
//!
//! Samplers implement the shared [`Sampler`](crate::core::Sampler) trait and
//! feed the sampling stream at the head of the RANSAC pipeline.

pub mod uniform;

pub use uniform::UniformRandomSampler;
