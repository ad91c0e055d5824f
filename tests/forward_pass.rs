// Forward-pass contract: bias pinning, shape immutability, determinism,
// and input validation.

use gatenet::{ActivationFunction, Network, NetworkError};

#[test]
fn bias_activation_stays_pinned_to_one() {
    let mut network = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 1);

    for inputs in [[0.0, 0.0], [0.3, -0.7], [1.0, 1.0]] {
        network.update(&inputs).unwrap();
        assert_eq!(network.input_activations().data[0][0], 1.0);
    }
}

#[test]
fn update_never_changes_layer_sizes() {
    let mut network = Network::seeded(2, 3, 2, ActivationFunction::Tanh, 2);
    // Bias-augmented input width.
    assert_eq!(network.input_size(), 3);

    network.update(&[0.5, -0.5]).unwrap();

    assert_eq!(network.input_size(), 3);
    assert_eq!(network.hidden_size(), 3);
    assert_eq!(network.output_size(), 2);
}

#[test]
fn update_is_idempotent_for_a_fixed_input() {
    let mut network = Network::seeded(2, 4, 1, ActivationFunction::Tanh, 3);

    let first = network.update(&[0.25, 0.75]).unwrap();
    let second = network.update(&[0.25, 0.75]).unwrap();

    // Bit-for-bit: the forward pass has no hidden randomness.
    assert_eq!(first, second);
}

#[test]
fn seeded_networks_are_reproducible() {
    let mut a = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 99);
    let mut b = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 99);

    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.update(&[1.0, 0.0]).unwrap(), b.update(&[1.0, 0.0]).unwrap());
}

#[test]
fn wrong_input_length_fails_without_touching_weights() {
    let mut network = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 4);
    let (wi_before, wo_before) = {
        let (wi, wo) = network.weights();
        (wi.clone(), wo.clone())
    };

    let err = network.update(&[0.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err, NetworkError::InputSizeMismatch { expected: 2, got: 3 });

    let (wi_after, wo_after) = network.weights();
    assert_eq!(*wi_after, wi_before);
    assert_eq!(*wo_after, wo_before);
}

#[test]
fn leaky_relu_forward_pass_stays_finite() {
    let mut network = Network::seeded(2, 2, 1, ActivationFunction::leaky_relu(), 5);
    assert_eq!(network.activation(), ActivationFunction::leaky_relu());

    let out = network.update(&[10.0, -10.0]).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].is_finite());
}
