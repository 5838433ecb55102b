use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::train::example::TrainingExample;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.iterations` epochs and returns the mean error
/// of the **last completed epoch** (`0.0` if no epoch ran).
///
/// Every epoch visits `examples` once, in the given order, with one weight
/// update per example; afterwards the network's error over `examples` is
/// appended to its error history.
///
/// # Errors
/// - `EmptyDataset` if `examples` is empty
/// - `DimensionMismatch` if any example does not fit the network
///
/// Both are checked before the first update.
#[instrument(
    level = "debug",
    skip(network, examples, config),
    fields(examples = examples.len(), iterations = config.iterations),
    err
)]
pub fn train_loop(
    network: &mut Network,
    examples: &[TrainingExample],
    config: &TrainConfig,
) -> Result<f64, NetworkError> {
    if examples.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }

    for example in examples {
        network.check_example(example)?;
    }

    let started = Instant::now();
    let progress_every = progress_interval(config);
    let mut last_error = 0.0;

    for epoch in 1..=config.iterations {
        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        for example in examples {
            network.train_example(example)?;
        }

        // ── Record the epoch ──────────────────────────────────────────────
        network.error(examples)?;
        last_error = network.error_values().last().copied().unwrap_or(last_error);

        debug!(
            epoch,
            error = last_error,
            elapsed_ms = t_start.elapsed().as_millis() as u64
        );

        if progress_every.map_or(false, |n| epoch % n == 0) {
            let percent = epoch * 100 / config.iterations;
            info!(percent, epoch, error = last_error, "training progress");
        }
    }

    info!(
        epochs = config.iterations,
        error = last_error,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "training finished"
    );

    Ok(last_error)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Epochs between two progress events, if any should be logged.
fn progress_interval(config: &TrainConfig) -> Option<usize> {
    if config.progress_steps == 0 || config.iterations == 0 {
        None
    } else {
        Some((config.iterations / config.progress_steps).max(1))
    }
}
