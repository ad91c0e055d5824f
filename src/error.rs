use thiserror::Error;

/// Caller-facing contract violations. All variants abort the current call
/// before any state is mutated; nothing is retried or recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NetworkError {
    /// Forward-pass input length does not match the non-bias input width.
    #[error("input length mismatch: expected {expected}, got {got}")]
    InputSizeMismatch { expected: usize, got: usize },

    /// Backward-pass target length does not match the output layer width.
    #[error("target length mismatch: expected {expected}, got {got}")]
    OutputSizeMismatch { expected: usize, got: usize },

    /// Epoch error became NaN or infinite while `check_finite` was enabled.
    #[error("non-finite epoch error at iteration {iteration}")]
    NonFiniteError { iteration: usize },
}
