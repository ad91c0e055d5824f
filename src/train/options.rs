use serde::{Serialize, Deserialize};

/// Hyperparameters and termination policy for a `train` run.
///
/// Termination is two independent knobs: `iterations` always bounds the run,
/// and `error_threshold` optionally ends it early once the summed epoch
/// error's absolute value drops below the threshold AND at least
/// `min_iterations` epochs have elapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOptions {
    /// Upper bound on full passes over the pattern set.
    pub iterations: usize,
    /// Learning rate N applied to each weight change.
    pub learning_rate: f64,
    /// Momentum factor M blending the previous step's weight change.
    pub momentum: f64,
    /// Early-exit threshold on the summed epoch error; `None` disables it.
    pub error_threshold: Option<f64>,
    /// Epochs that must elapse before the threshold is consulted.
    pub min_iterations: usize,
    /// Emit a log record every this many epochs; 0 disables logging.
    pub log_every: usize,
    /// Fail fast with `NetworkError::NonFiniteError` if the epoch error
    /// blows up to NaN or infinity (e.g. with an oversized learning rate).
    pub check_finite: bool,
}

impl TrainOptions {
    /// Run-to-completion options: ten log reports per run, no early exit,
    /// finiteness checking on.
    pub fn new(iterations: usize, learning_rate: f64, momentum: f64) -> TrainOptions {
        TrainOptions {
            iterations,
            learning_rate,
            momentum,
            error_threshold: None,
            min_iterations: 1,
            log_every: (iterations / 10).max(1),
            check_finite: true,
        }
    }

    /// Same as `new` but with an error-threshold early exit.
    pub fn with_threshold(
        iterations: usize,
        learning_rate: f64,
        momentum: f64,
        error_threshold: f64,
    ) -> TrainOptions {
        TrainOptions {
            error_threshold: Some(error_threshold),
            ..TrainOptions::new(iterations, learning_rate, momentum)
        }
    }
}
