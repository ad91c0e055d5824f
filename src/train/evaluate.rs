use serde::{Serialize, Deserialize};

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::train::pattern::Pattern;

/// Predicted vs. expected output for one pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub inputs: Vec<f64>,
    pub expected: Vec<f64>,
    pub predicted: Vec<f64>,
}

/// Runs a forward pass over every pattern and collects the predictions.
/// Mutates nothing beyond the forward pass's usual activation overwrite;
/// rendering the results is left to the caller.
pub fn evaluate(
    network: &mut Network,
    patterns: &[Pattern],
) -> Result<Vec<Evaluation>, NetworkError> {
    patterns.iter()
        .map(|pattern| {
            let predicted = network.update(&pattern.inputs)?;
            Ok(Evaluation {
                inputs: pattern.inputs.clone(),
                expected: pattern.targets.clone(),
                predicted,
            })
        })
        .collect()
}
