//! Fan-in merger.
//!
//! Merges many independent result streams into one. The inputs are shared
//! out over a few forwarder threads; each forwarder holds a clone of the
//! output sender and relays whichever of its inputs is ready first. The merged
//! receiver disconnects when the last forwarder drops its sender, which only
//! happens after every input has disconnected: the sender count is the join
//! barrier. No cross-input ordering is preserved.

use std::num::NonZeroUsize;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Select, Sender};

use crate::error::{Error, Result};

/// Default number of forwarder threads: the available parallelism.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Merge `inputs` into a single receiver using at most `workers` forwarders.
///
/// Every item of every input is delivered exactly once. With no inputs the
/// returned receiver is already disconnected.
pub fn fan_in<T>(inputs: Vec<Receiver<T>>, workers: usize) -> Result<Receiver<T>>
where
    T: Send + 'static,
{
    let (tx, rx) = unbounded();
    if inputs.is_empty() {
        return Ok(rx);
    }

    let workers = workers.clamp(1, inputs.len());
    let share = inputs.len().div_ceil(workers);
    let mut inputs = inputs.into_iter();
    let mut spawned = 0usize;
    loop {
        let chunk: Vec<Receiver<T>> = inputs.by_ref().take(share).collect();
        if chunk.is_empty() {
            break;
        }
        let output = tx.clone();
        thread::Builder::new()
            .name(format!("ransac-fan-in-{}", spawned))
            .spawn(move || forward(chunk, output))
            .map_err(Error::Spawn)?;
        spawned += 1;
    }
    log::debug!("fan-in merging through {} forwarders", spawned);

    Ok(rx)
}

/// Relay every item of `inputs` to `output` in readiness order.
fn forward<T>(inputs: Vec<Receiver<T>>, output: Sender<T>) {
    let mut select = Select::new();
    for input in &inputs {
        select.recv(input);
    }

    let mut open = inputs.len();
    while open > 0 {
        let oper = select.select();
        let index = oper.index();
        match oper.recv(&inputs[index]) {
            Ok(item) => {
                if output.send(item).is_err() {
                    return;
                }
            }
            Err(_) => {
                select.remove(index);
                open -= 1;
            }
        }
    }
}
