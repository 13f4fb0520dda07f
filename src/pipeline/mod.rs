//! Concurrent RANSAC pipeline for a single dominant plane.
//!
//! One round wires the stages together as
//!
//! ```text
//! random_points → triplets → take_n(N) → estimate_planes
//!     → spawn_scorers (N tasks) → fan_in → best_plane
//! ```
//!
//! The cloud is shared read-only through an `Arc<[Point]>` for the whole
//! round. The only mutable score state is the reducer's local best-so-far,
//! which no other task can reach.

pub mod fan_in;
pub mod reduce;
pub mod scorers;
pub mod stages;

use std::sync::Arc;

use crate::core::{Estimator, Sampler, Scoring};
use crate::error::{Error, Result};
use crate::models::{Plane, ScoredPlane};
use crate::types::Point;

pub use fan_in::fan_in;
pub use reduce::best_plane;
pub use scorers::spawn_scorers;
pub use stages::{estimate_planes, random_points, take_n, triplets};

/// Default capacity of the bounded channels between streaming stages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A RANSAC round assembled from a sampler, an estimator and a scoring
/// strategy.
///
/// The sampler is the run's single random source: each round forks a child
/// from it for the sampling thread, so seeding the sampler makes every round
/// reproducible.
#[derive(Debug)]
pub struct RansacPipeline<Sa, E, Sc> {
    pub sampler: Sa,
    pub estimator: E,
    pub scoring: Arc<Sc>,
    /// Candidate planes drawn per round.
    pub iterations: usize,
    pub channel_capacity: usize,
    pub fan_in_workers: usize,
}

impl<Sa, E, Sc> RansacPipeline<Sa, E, Sc>
where
    Sa: Sampler + Send + 'static,
    E: Estimator<Model = Plane> + Clone + Send + 'static,
    Sc: Scoring<Plane> + Send + Sync + 'static,
{
    /// Create a new pipeline from its components.
    pub fn new(sampler: Sa, estimator: E, scoring: Sc, iterations: usize) -> Self {
        Self {
            sampler,
            estimator,
            scoring: Arc::new(scoring),
            iterations,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            fan_in_workers: fan_in::default_workers(),
        }
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn with_fan_in_workers(mut self, workers: usize) -> Self {
        self.fan_in_workers = workers.max(1);
        self
    }

    /// Inlier threshold of the scoring strategy.
    pub fn threshold(&self) -> f64 {
        self.scoring.threshold()
    }

    /// Run one round on `cloud` and return the best-supported plane.
    ///
    /// An empty cloud is refused before any stage starts. If every candidate
    /// is degenerate the result is the zero-support sentinel.
    pub fn run(&mut self, cloud: Arc<[Point]>) -> Result<ScoredPlane> {
        if cloud.is_empty() {
            return Err(Error::EmptyCloud);
        }
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }

        log::debug!(
            "RANSAC round: {} points, {} iterations",
            cloud.len(),
            self.iterations
        );

        let capacity = self.channel_capacity;
        let points = random_points(Arc::clone(&cloud), self.sampler.fork(), capacity)?;
        let samples = triplets(points, capacity)?;
        let limited = take_n(samples, self.iterations, capacity)?;
        let planes = estimate_planes(limited, self.estimator.clone(), capacity)?;
        let workers = spawn_scorers(planes, cloud, Arc::clone(&self.scoring));
        let merged = fan_in(workers, self.fan_in_workers)?;
        let best = best_plane(merged);

        log::debug!("RANSAC round done: best support {}", best.support);
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::PlaneEstimator;
    use crate::samplers::UniformRandomSampler;
    use crate::scoring::PlaneSupportScoring;

    type PlanePipeline = RansacPipeline<UniformRandomSampler, PlaneEstimator, PlaneSupportScoring>;

    fn pipeline(seed: u64, iterations: usize) -> PlanePipeline {
        RansacPipeline::new(
            UniformRandomSampler::from_seed(seed),
            PlaneEstimator::new(),
            PlaneSupportScoring::new(0.1),
            iterations,
        )
    }

    fn ground_with_outliers() -> Vec<Point> {
        let mut cloud = Vec::new();
        for i in 0..10 {
            for j in 0..9 {
                cloud.push(Point::new(i as f64, j as f64, 0.0));
            }
        }
        for k in 0..10 {
            let k = k as f64;
            cloud.push(Point::new(0.37 * k, 9.1 - 0.8 * k, 1.0 + 0.45 * k));
        }
        cloud
    }

    #[test]
    fn round_finds_the_ground_plane() {
        let cloud: Arc<[Point]> = Arc::from(ground_with_outliers());
        let best = pipeline(11, 103).run(cloud).unwrap();
        assert_eq!(best.support, 90);
        assert_eq!(best.plane.a, 0.0);
        assert_eq!(best.plane.b, 0.0);
    }

    #[test]
    fn empty_cloud_is_refused() {
        let cloud: Arc<[Point]> = Arc::from(Vec::new());
        assert!(matches!(pipeline(1, 10).run(cloud), Err(Error::EmptyCloud)));
    }

    #[test]
    fn zero_iterations_is_refused() {
        let cloud: Arc<[Point]> = Arc::from(ground_with_outliers());
        assert!(matches!(
            pipeline(1, 0).run(cloud),
            Err(Error::ZeroIterations)
        ));
    }

    #[test]
    fn single_point_cloud_yields_sentinel() {
        // Every triplet repeats the only point, so every candidate is degenerate.
        let cloud: Arc<[Point]> = Arc::from(vec![Point::new(1.0, 2.0, 3.0)]);
        let best = pipeline(5, 20).run(cloud).unwrap();
        assert_eq!(best, ScoredPlane::default());
    }

    #[test]
    fn consecutive_rounds_reuse_the_pipeline() {
        let cloud: Arc<[Point]> = Arc::from(ground_with_outliers());
        let mut p = pipeline(3, 103).with_channel_capacity(1).with_fan_in_workers(2);
        for _ in 0..3 {
            assert_eq!(p.run(Arc::clone(&cloud)).unwrap().support, 90);
        }
    }
}
