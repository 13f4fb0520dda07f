//! Core traits of the plane detection pipeline.
//!
//! The pipeline is assembled from three pluggable components:
//! - a [`Sampler`] drawing random point indices,
//! - an [`Estimator`] turning a minimal sample into a model hypothesis,
//! - a [`Scoring`] strategy counting the support of a hypothesis.
//!
//! This module also holds the closed-form iteration count used to size a
//! RANSAC round.

use crate::error::{Error, Result};
use crate::types::{Point, Triplet};

/// Largest iteration count a RANSAC round will accept.
pub const MAX_ITERATIONS: usize = 1 << 24;

/// Source of random indices for the sampling stream.
pub trait Sampler {
    /// Draw one index uniformly from `0..len`, with replacement.
    ///
    /// Returns `None` when `len == 0`; there is nothing to draw from.
    fn sample(&mut self, len: usize) -> Option<usize>;

    /// Derive an independent sampler for one sampling stream, advancing
    /// `self` so that successive forks differ.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// Estimator responsible for generating a model hypothesis from a triplet.
pub trait Estimator {
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Estimate a model from a minimal sample.
    ///
    /// Degenerate samples still produce a model; the scoring step is in charge
    /// of giving such models zero support.
    fn estimate_model(&self, sample: &Triplet) -> Self::Model;
}

/// Scoring strategy used to evaluate model support.
pub trait Scoring<M> {
    /// Inlier/outlier threshold on point-to-model distance.
    fn threshold(&self) -> f64;

    /// Count the points of `cloud` that support `model`.
    fn score(&self, cloud: &[Point], model: &M) -> usize;
}

/// Number of RANSAC iterations needed to draw at least one all-inlier triplet
/// with probability `confidence`, given the fraction `inlier_ratio` of points
/// lying on the plane.
///
/// `N = floor(log(1 - confidence) / log(1 - inlier_ratio³))`
///
/// Counts above [`MAX_ITERATIONS`] are refused: every iteration becomes a
/// scoring task, so such a round could not be run.
pub fn number_of_iterations(confidence: f64, inlier_ratio: f64) -> Result<usize> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(Error::InvalidConfidence(confidence));
    }
    if !(inlier_ratio > 0.0 && inlier_ratio < 1.0) {
        return Err(Error::InvalidInlierRatio(inlier_ratio));
    }

    let p_good_sample = inlier_ratio.powi(3);
    let log_one_minus_conf = (1.0 - confidence).ln();
    let log_one_minus_p = (-p_good_sample).ln_1p();

    // w³ underflows to zero for tiny w; the ratio is then +inf.
    let required = (log_one_minus_conf / log_one_minus_p).floor();
    if !required.is_finite() || required > MAX_ITERATIONS as f64 {
        return Err(Error::TooManyIterations {
            required,
            limit: MAX_ITERATIONS,
        });
    }
    if required < 1.0 {
        return Err(Error::NoIterations {
            confidence,
            inlier_ratio,
        });
    }

    Ok(required as usize)
}
