use serde::{Serialize, Deserialize};

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::train::options::TrainOptions;
use crate::train::pattern::Pattern;

/// Outcome of a completed `train` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSummary {
    /// Epochs actually executed (may be fewer than requested on early exit).
    pub epochs_run: usize,
    /// Summed error of the first epoch.
    pub first_error: f64,
    /// Summed error of the last completed epoch.
    pub final_error: f64,
    /// Whether the error-threshold early exit fired.
    pub converged: bool,
}

/// Trains `network` in place: one forward + backward pass per pattern per
/// epoch, online (no batching), summing the scalar error over the epoch.
///
/// Terminates after `options.iterations` epochs, or earlier when
/// `options.error_threshold` is set, at least `options.min_iterations`
/// epochs have run, and the summed epoch error's absolute value falls below
/// the threshold. Progress is reported through the `log` facade every
/// `options.log_every` epochs.
pub fn train(
    network: &mut Network,
    patterns: &[Pattern],
    options: &TrainOptions,
) -> Result<TrainSummary, NetworkError> {
    let mut first_error = None;
    let mut final_error = 0.0;
    let mut epochs_run = 0;
    let mut converged = false;

    for epoch in 1..=options.iterations {
        let mut epoch_error = 0.0;

        for pattern in patterns {
            network.update(&pattern.inputs)?;
            epoch_error += network.back_propagate(
                &pattern.targets,
                options.learning_rate,
                options.momentum,
            )?;
        }

        if options.check_finite && !epoch_error.is_finite() {
            return Err(NetworkError::NonFiniteError { iteration: epoch });
        }

        first_error.get_or_insert(epoch_error);
        final_error = epoch_error;
        epochs_run = epoch;

        if options.log_every > 0 && epoch % options.log_every == 0 {
            log::info!("epoch {epoch}/{}: error {epoch_error:.6}", options.iterations);
        }

        if let Some(threshold) = options.error_threshold {
            if epoch >= options.min_iterations && epoch_error.abs() < threshold {
                log::info!("error below {threshold:e} after {epoch} epochs, stopping");
                converged = true;
                break;
            }
        }
    }

    Ok(TrainSummary {
        epochs_run,
        first_error: first_error.unwrap_or(0.0),
        final_error,
        converged,
    })
}
