use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::activation::activation::ActivationFunction;
use crate::error::NetworkError;
use crate::math::matrix::Matrix;

/// Half-width of the uniform init range for input-to-hidden weights.
const INPUT_WEIGHT_LIMIT: f64 = 0.2;

/// A perceptron with one hidden layer and a bias-augmented input.
///
/// The input layer carries one extra unit whose activation is pinned to 1.0;
/// its weights act as per-neuron offsets, so no separate bias vectors are
/// needed. Activations are column vectors, weights are row-major matrices of
/// shape (destination layer × source layer). All matrices are exclusively
/// owned; the momentum stores always hold a value distinct from the weight
/// change being computed in the current step.
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    activation: ActivationFunction,
    input_activations: Matrix,
    hidden_activations: Matrix,
    output_activations: Matrix,
    input_weights: Matrix,
    output_weights: Matrix,
    input_momentum: Matrix,
    output_momentum: Matrix,
}

impl Network {
    /// Builds a network with randomly initialized weights. `input_size`
    /// counts caller-visible inputs; a bias unit is appended internally.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        activation: ActivationFunction,
    ) -> Network {
        Network::with_rng(input_size, hidden_size, output_size, activation, &mut rand::thread_rng())
    }

    /// Deterministic construction for reproducible runs and tests.
    pub fn seeded(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        activation: ActivationFunction,
        seed: u64,
    ) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::with_rng(input_size, hidden_size, output_size, activation, &mut rng)
    }

    fn with_rng<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Network {
        let input_size = input_size + 1;
        let output_limit = activation.output_weight_limit();

        Network {
            input_size,
            hidden_size,
            output_size,
            activation,
            input_activations: Matrix::filled(input_size, 1, 1.0),
            hidden_activations: Matrix::filled(hidden_size, 1, 1.0),
            output_activations: Matrix::filled(output_size, 1, 1.0),
            input_weights: Matrix::uniform(
                hidden_size, input_size, -INPUT_WEIGHT_LIMIT, INPUT_WEIGHT_LIMIT, rng,
            ),
            output_weights: Matrix::uniform(
                output_size, hidden_size, -output_limit, output_limit, rng,
            ),
            input_momentum: Matrix::zeros(hidden_size, input_size),
            output_momentum: Matrix::zeros(output_size, hidden_size),
        }
    }

    /// Forward pass. Copies `inputs` into the non-bias slots of the input
    /// activation vector and propagates through both layers. Returns the
    /// output activations; the internal vectors are overwritten by the next
    /// call, so the returned vector is an owned copy.
    pub fn update(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        let expected = self.input_size - 1;
        if inputs.len() != expected {
            return Err(NetworkError::InputSizeMismatch { expected, got: inputs.len() });
        }

        // Slot 0 is the bias unit and stays at 1.0.
        for (i, &value) in inputs.iter().enumerate() {
            self.input_activations.data[i + 1][0] = value;
        }

        let act = self.activation;
        self.hidden_activations = (self.input_weights.clone() * self.input_activations.clone())
            .map(|x| act.apply(x));
        self.output_activations = (self.output_weights.clone() * self.hidden_activations.clone())
            .map(|x| act.apply(x));

        Ok(self.output_activations.column_to_vec())
    }

    /// Backward pass with momentum. Deltas are computed from the activations
    /// stored by the most recent `update` (a fresh network's all-ones
    /// activations are valid too). The momentum term blends the PREVIOUS
    /// step's weight change; the change just computed is stored for the next
    /// call. Returns half the sum of squared output errors.
    pub fn back_propagate(
        &mut self,
        targets: &[f64],
        learning_rate: f64,
        momentum: f64,
    ) -> Result<f64, NetworkError> {
        if targets.len() != self.output_size {
            return Err(NetworkError::OutputSizeMismatch {
                expected: self.output_size,
                got: targets.len(),
            });
        }

        let act = self.activation;
        let targets = Matrix::column(targets);

        // δ_out = f'(a_out) ⊙ (t - a_out)
        let output_error = targets - self.output_activations.clone();
        let output_delta = self.output_activations
            .map(|y| act.gradient_from_output(y))
            .hadamard(&output_error);

        // δ_hidden = f'(a_hidden) ⊙ (Wₒᵀ · δ_out)
        let hidden_error = self.output_weights.transpose() * output_delta.clone();
        let hidden_delta = self.hidden_activations
            .map(|y| act.gradient_from_output(y))
            .hadamard(&hidden_error);

        // Wₒ += N·(δ_out · a_hiddenᵀ) + M·previous change
        let output_change = output_delta * self.hidden_activations.transpose();
        self.output_weights = self.output_weights.clone()
            + output_change.map(|x| x * learning_rate)
            + self.output_momentum.map(|x| x * momentum);
        self.output_momentum = output_change;

        // Wᵢ += N·(δ_hidden · a_inputᵀ) + M·previous change
        let hidden_change = hidden_delta * self.input_activations.transpose();
        self.input_weights = self.input_weights.clone()
            + hidden_change.map(|x| x * learning_rate)
            + self.input_momentum.map(|x| x * momentum);
        self.input_momentum = hidden_change;

        Ok(0.5 * output_error.sum_of_squares())
    }

    /// Both weight matrices, (input-to-hidden, hidden-to-output). How they
    /// get printed is the caller's business.
    pub fn weights(&self) -> (&Matrix, &Matrix) {
        (&self.input_weights, &self.output_weights)
    }

    /// Bias-augmented input width (caller-visible inputs + 1).
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Input activation column, bias unit at index 0.
    pub fn input_activations(&self) -> &Matrix {
        &self.input_activations
    }
}
