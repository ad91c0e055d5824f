pub mod evaluate;
pub mod options;
pub mod pattern;
pub mod trainer;

pub use evaluate::{evaluate, Evaluation};
pub use options::TrainOptions;
pub use pattern::Pattern;
pub use trainer::{train, TrainSummary};
