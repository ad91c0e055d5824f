use serde::{Serialize, Deserialize};

/// One training example: an input row and its expected output row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Pattern {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Pattern {
        Pattern { inputs, targets }
    }
}
