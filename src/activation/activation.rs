use serde::{Serialize, Deserialize};

/// Closed set of supported activations. Each variant bundles the forward
/// function with its derivative expressed in terms of the already-computed
/// activation output, which is the form the backward pass consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Tanh,
    LeakyReLU { alpha: f64 },
}

impl ActivationFunction {
    /// Leaky ReLU with the conventional 0.01 negative slope.
    pub fn leaky_relu() -> ActivationFunction {
        ActivationFunction::LeakyReLU { alpha: 0.01 }
    }

    /// Element-wise forward activation.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
        }
    }

    /// Derivative given the activation OUTPUT `y` (not the pre-activation).
    ///
    /// For tanh, f'(x) = 1 - tanh(x)² = 1 - y². For leaky ReLU the sign of
    /// the output matches the sign of the input, so the slope can be read
    /// off `y` directly.
    pub fn gradient_from_output(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => 1.0 - y * y,
            ActivationFunction::LeakyReLU { alpha } => if y > 0.0 { 1.0 } else { *alpha },
        }
    }

    /// Half-width of the uniform init range for hidden-to-output weights.
    /// Tanh tolerates the wide ±2.0 range; leaky ReLU starts tighter.
    pub fn output_weight_limit(&self) -> f64 {
        match self {
            ActivationFunction::Tanh => 2.0,
            ActivationFunction::LeakyReLU { .. } => 0.5,
        }
    }
}
