pub mod math;
pub mod activation;
pub mod error;
pub mod network;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use error::NetworkError;
pub use network::network::Network;
pub use train::evaluate::{evaluate, Evaluation};
pub use train::options::TrainOptions;
pub use train::pattern::Pattern;
pub use train::trainer::{train, TrainSummary};
