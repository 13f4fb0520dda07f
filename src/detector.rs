//! Multi-plane driver.
//!
//! Runs the RANSAC pipeline repeatedly, removing each dominant plane's inliers
//! before the next round, and returns the top `plane_count` planes plus the
//! residual cloud.
//!
//! The driver walks a small state machine:
//!
//! ```text
//! HasCloud ──▶ RunRound ──▶ ExtractInliers ──▶ HasCloud … ──▶ Done
//! ```
//!
//! Each round gets a fresh, read-only cloud value; the driver is the only
//! owner of the working cloud between rounds.

use std::sync::Arc;

use crate::core::Sampler;
use crate::error::{Error, Result};
use crate::estimators::PlaneEstimator;
use crate::models::{Detection, DominantPlane, ScoredPlane};
use crate::pipeline::RansacPipeline;
use crate::samplers::UniformRandomSampler;
use crate::scoring::{partition, PlaneSupportScoring};
use crate::settings::RansacSettings;
use crate::types::{Point, PointCloud};

enum DriverState {
    /// A working cloud waiting for the next round (or for the final result).
    HasCloud(PointCloud),
    /// Cloud frozen for the duration of one pipeline run.
    RunRound(Arc<[Point]>),
    /// Round finished; the winner's inliers are still in the cloud.
    ExtractInliers(Arc<[Point]>, ScoredPlane),
    Done(PointCloud),
}

/// Extracts the dominant planes of a point cloud.
///
/// The iteration count is computed once from the settings and reused for
/// every round, even as the cloud shrinks.
pub struct DominantPlaneDetector<Sa = UniformRandomSampler> {
    pipeline: RansacPipeline<Sa, PlaneEstimator, PlaneSupportScoring>,
    plane_count: usize,
}

impl DominantPlaneDetector<UniformRandomSampler> {
    /// Build a detector whose random source is seeded from `settings.seed`.
    pub fn new(settings: &RansacSettings) -> Result<Self> {
        Self::with_sampler(
            settings,
            UniformRandomSampler::from_optional_seed(settings.seed),
        )
    }
}

impl<Sa> DominantPlaneDetector<Sa>
where
    Sa: Sampler + Send + 'static,
{
    /// Build a detector around an explicit random source.
    pub fn with_sampler(settings: &RansacSettings, sampler: Sa) -> Result<Self> {
        settings.validate()?;
        let iterations = settings.iterations()?;
        let pipeline = RansacPipeline::new(
            sampler,
            PlaneEstimator::new(),
            PlaneSupportScoring::new(settings.inlier_threshold),
            iterations,
        )
        .with_channel_capacity(settings.channel_capacity);

        Ok(Self {
            pipeline,
            plane_count: settings.plane_count,
        })
    }

    /// RANSAC iterations drawn in each round.
    pub fn iterations(&self) -> usize {
        self.pipeline.iterations
    }

    pub fn plane_count(&self) -> usize {
        self.plane_count
    }

    /// Run a single round and extract the winning plane's inliers.
    pub fn find_plane(&mut self, cloud: &[Point]) -> Result<DominantPlane> {
        let cloud: Arc<[Point]> = Arc::from(cloud);
        let scored = self.pipeline.run(Arc::clone(&cloud))?;
        let (inliers, _) = partition(&scored.plane, &cloud, self.pipeline.threshold());
        Ok(DominantPlane { scored, inliers })
    }

    /// Extract `plane_count` dominant planes from `cloud`.
    ///
    /// Fails with [`Error::EmptyCloud`] if the cloud runs out of points before
    /// the last round.
    pub fn detect(&mut self, cloud: PointCloud) -> Result<Detection> {
        let threshold = self.pipeline.threshold();
        let mut planes: Vec<DominantPlane> = Vec::with_capacity(self.plane_count);
        let mut state = DriverState::HasCloud(cloud);

        loop {
            state = match state {
                DriverState::HasCloud(cloud) if planes.len() == self.plane_count => {
                    DriverState::Done(cloud)
                }
                DriverState::HasCloud(cloud) => {
                    if cloud.is_empty() {
                        log::error!("no points left for round {}", planes.len() + 1);
                        return Err(Error::EmptyCloud);
                    }
                    DriverState::RunRound(Arc::from(cloud))
                }
                DriverState::RunRound(cloud) => {
                    let best = self.pipeline.run(Arc::clone(&cloud))?;
                    DriverState::ExtractInliers(cloud, best)
                }
                DriverState::ExtractInliers(cloud, best) => {
                    let (inliers, remainder) = partition(&best.plane, &cloud, threshold);
                    if best.support == 0 {
                        log::warn!(
                            "round {} found no supported plane in {} points",
                            planes.len() + 1,
                            cloud.len()
                        );
                    } else {
                        log::info!(
                            "dominant plane {}: {:.4}x + {:.4}y + {:.4}z + {:.4} = 0 ({} inliers, {} left)",
                            planes.len() + 1,
                            best.plane.a,
                            best.plane.b,
                            best.plane.c,
                            best.plane.d,
                            inliers.len(),
                            remainder.len()
                        );
                    }
                    planes.push(DominantPlane {
                        scored: best,
                        inliers,
                    });
                    DriverState::HasCloud(remainder)
                }
                DriverState::Done(remainder) => {
                    return Ok(Detection {
                        planes,
                        remainder,
                        iterations: self.iterations(),
                    });
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: u64) -> RansacSettings {
        RansacSettings {
            confidence: 0.9999,
            inlier_ratio: 0.3,
            inlier_threshold: 0.1,
            plane_count: 3,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Grid of integer points at height `z`.
    fn layer(nx: usize, ny: usize, z: f64) -> PointCloud {
        (0..nx)
            .flat_map(|i| (0..ny).map(move |j| Point::new(i as f64, j as f64, z)))
            .collect()
    }

    #[test]
    fn detector_uses_settings_iteration_count() {
        let detector = DominantPlaneDetector::new(&settings(1)).unwrap();
        assert_eq!(detector.iterations(), 336);
        assert_eq!(detector.plane_count(), 3);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let bad = RansacSettings {
            inlier_threshold: -1.0,
            ..settings(1)
        };
        assert!(matches!(
            DominantPlaneDetector::new(&bad),
            Err(Error::InvalidThreshold(_))
        ));
    }

    #[test]
    fn planes_are_extracted_largest_first() {
        let mut cloud = layer(10, 10, 0.0);
        cloud.extend(layer(8, 8, 5.0));
        cloud.extend(layer(6, 6, 10.0));
        let total = cloud.len();

        let mut detector = DominantPlaneDetector::new(&settings(17)).unwrap();
        let detection = detector.detect(cloud).unwrap();

        let supports: Vec<usize> = detection.planes.iter().map(|p| p.support()).collect();
        assert_eq!(supports, vec![100, 64, 36]);
        for (plane, z) in detection.planes.iter().zip([0.0, 5.0, 10.0]) {
            assert_eq!(plane.inliers.len(), plane.support());
            assert!(plane.inliers.iter().all(|p| p.z == z));
        }
        assert!(detection.remainder.is_empty());
        assert_eq!(
            detection.planes.iter().map(|p| p.inliers.len()).sum::<usize>(),
            total
        );
    }

    #[test]
    fn running_out_of_points_aborts_the_run() {
        let mut detector = DominantPlaneDetector::new(&settings(2)).unwrap();
        let result = detector.detect(layer(5, 5, 0.0));
        assert!(matches!(result, Err(Error::EmptyCloud)));
    }

    #[test]
    fn empty_input_is_refused() {
        let mut detector = DominantPlaneDetector::new(&settings(2)).unwrap();
        assert!(matches!(detector.detect(Vec::new()), Err(Error::EmptyCloud)));
        assert!(matches!(detector.find_plane(&[]), Err(Error::EmptyCloud)));
    }

    #[test]
    fn same_seed_reproduces_the_detection() {
        let mut cloud = layer(10, 10, 0.0);
        cloud.extend(layer(8, 8, 5.0));
        cloud.extend(layer(6, 6, 10.0));
        cloud.push(Point::new(0.5, 0.5, 2.5));

        let run = |seed| {
            let mut detector = DominantPlaneDetector::new(&settings(seed)).unwrap();
            detector.detect(cloud.clone()).unwrap()
        };
        let a = run(99);
        let b = run(99);
        for (pa, pb) in a.planes.iter().zip(&b.planes) {
            assert_eq!(pa.support(), pb.support());
            assert_eq!(pa.inliers, pb.inliers);
        }
        assert_eq!(a.remainder, b.remainder);
    }
}
