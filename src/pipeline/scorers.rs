//! Support scorer pool.
//!
//! One scoring task per candidate plane, scheduled on rayon's thread pool.
//! Every task reads the shared cloud, sends exactly one [`ScoredPlane`] on its
//! own one-slot channel and ends, so it never blocks.

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver};

use crate::core::Scoring;
use crate::models::{Plane, ScoredPlane};
use crate::types::Point;

/// Spawn one scoring task per plane received on `planes`.
///
/// Returns once `planes` is exhausted, with one receiver per spawned task.
/// Tasks may still be running; each receiver yields its single result and
/// then disconnects.
pub fn spawn_scorers<Sc>(
    planes: Receiver<Plane>,
    cloud: Arc<[Point]>,
    scoring: Arc<Sc>,
) -> Vec<Receiver<ScoredPlane>>
where
    Sc: Scoring<Plane> + Send + Sync + 'static,
{
    let workers: Vec<Receiver<ScoredPlane>> = planes
        .iter()
        .map(|plane| {
            let (tx, rx) = bounded(1);
            let cloud = Arc::clone(&cloud);
            let scoring = Arc::clone(&scoring);
            rayon::spawn(move || {
                let support = scoring.score(&cloud, &plane);
                // The merger may already be gone if the round was abandoned.
                let _ = tx.send(ScoredPlane::new(plane, support));
            });
            rx
        })
        .collect();
    log::debug!("spawned {} support scorers", workers.len());
    workers
}
