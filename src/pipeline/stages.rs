//! Streaming stages at the head of a RANSAC round.
//!
//! Each stage runs on its own named thread and talks to its neighbours only
//! through bounded `crossbeam_channel` channels, so a full channel blocks the
//! producer. Stages stop when their upstream disconnects or when their
//! downstream receiver is dropped; the latter is how [`take_n`] abandons the
//! infinite sampling stream once enough triplets have gone through.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, Receiver};

use crate::core::{Estimator, Sampler};
use crate::error::{Error, Result};
use crate::types::{Point, Triplet};

/// Start a detached stage thread. It ends on its own once its channels
/// disconnect.
fn spawn_stage<F>(name: &str, body: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(name.into())
        .spawn(body)
        .map_err(Error::Spawn)?;
    Ok(())
}

/// Unbounded stream of points drawn uniformly, with replacement, from `cloud`.
///
/// The stream only ends when the returned receiver is dropped, or as soon as
/// the sampler yields nothing or an index outside the cloud.
pub fn random_points<S>(
    cloud: Arc<[Point]>,
    mut sampler: S,
    capacity: usize,
) -> Result<Receiver<Point>>
where
    S: Sampler + Send + 'static,
{
    let (tx, rx) = bounded(capacity);
    spawn_stage("ransac-sampler", move || {
        let mut sent = 0usize;
        while let Some(index) = sampler.sample(cloud.len()) {
            let Some(point) = cloud.get(index) else {
                log::warn!("sampler drew index {} from {} points", index, cloud.len());
                break;
            };
            if tx.send(*point).is_err() {
                break;
            }
            sent += 1;
        }
        log::debug!("sampling stream stopped after {} points", sent);
    })?;
    Ok(rx)
}

/// Group consecutive points into triplets, in arrival order.
///
/// A trailing incomplete triplet is discarded when upstream closes.
pub fn triplets(points: Receiver<Point>, capacity: usize) -> Result<Receiver<Triplet>> {
    let (tx, rx) = bounded(capacity);
    spawn_stage("ransac-triplets", move || {
        let next = || points.recv().ok();
        loop {
            let (Some(p0), Some(p1), Some(p2)) = (next(), next(), next()) else {
                break;
            };
            if tx.send([p0, p1, p2]).is_err() {
                break;
            }
        }
    })?;
    Ok(rx)
}

/// Forward exactly `n` items from `upstream`, then close.
///
/// Once `n` items have passed, the upstream receiver is dropped, which stops
/// every stage feeding it. Fewer items are forwarded only if upstream closes
/// first.
pub fn take_n<T>(upstream: Receiver<T>, n: usize, capacity: usize) -> Result<Receiver<T>>
where
    T: Send + 'static,
{
    let (tx, rx) = bounded(capacity);
    spawn_stage("ransac-take-n", move || {
        let mut forwarded = 0usize;
        for item in upstream.iter().take(n) {
            if tx.send(item).is_err() {
                break;
            }
            forwarded += 1;
        }
        // Disconnect upstream before closing downstream.
        drop(upstream);
        if forwarded < n {
            log::warn!("limiter forwarded only {} of {} items", forwarded, n);
        } else {
            log::debug!("limiter forwarded {} items", forwarded);
        }
    })?;
    Ok(rx)
}

/// Map every triplet to a model hypothesis, preserving order.
pub fn estimate_planes<E>(
    triplets: Receiver<Triplet>,
    estimator: E,
    capacity: usize,
) -> Result<Receiver<E::Model>>
where
    E: Estimator + Send + 'static,
    E::Model: Send + 'static,
{
    let (tx, rx) = bounded(capacity);
    spawn_stage("ransac-estimator", move || {
        for triplet in triplets.iter() {
            if tx.send(estimator.estimate_model(&triplet)).is_err() {
                break;
            }
        }
    })?;
    Ok(rx)
}
