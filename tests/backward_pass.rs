// Backward-pass contract: returned error value, momentum semantics, target
// validation, and behavior on a freshly constructed network.

use approx::assert_relative_eq;
use gatenet::{ActivationFunction, Network, NetworkError};

#[test]
fn back_propagate_works_on_a_fresh_network() {
    // Activations are pre-initialized to 1.0, so no prior forward pass is
    // required.
    let mut network = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 10);
    let error = network.back_propagate(&[0.5], 0.5, 0.1).unwrap();

    assert_relative_eq!(error, 0.5 * (0.5_f64 - 1.0).powi(2));
}

#[test]
fn returned_error_is_half_the_squared_output_error() {
    let mut network = Network::seeded(2, 3, 2, ActivationFunction::Tanh, 11);
    let output = network.update(&[0.2, 0.8]).unwrap();

    let targets = [1.0, 0.0];
    let expected: f64 = 0.5 * output.iter().zip(targets.iter())
        .map(|(o, t)| (t - o) * (t - o))
        .sum::<f64>();

    let error = network.back_propagate(&targets, 0.3, 0.0).unwrap();
    assert_relative_eq!(error, expected, max_relative = 1e-12);
}

#[test]
fn wrong_target_length_fails_before_any_update() {
    let mut network = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 12);
    network.update(&[1.0, 0.0]).unwrap();
    let (wi_before, wo_before) = {
        let (wi, wo) = network.weights();
        (wi.clone(), wo.clone())
    };

    let err = network.back_propagate(&[1.0, 0.0], 0.5, 0.1).unwrap_err();
    assert_eq!(err, NetworkError::OutputSizeMismatch { expected: 1, got: 2 });

    let (wi_after, wo_after) = network.weights();
    assert_eq!(*wi_after, wi_before);
    assert_eq!(*wo_after, wo_before);
}

#[test]
fn momentum_factor_is_irrelevant_on_the_first_step() {
    // The momentum matrices start at zero, so any factor multiplies into
    // nothing on the first call.
    let mut plain = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 13);
    let mut heavy = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 13);

    plain.update(&[1.0, 0.0]).unwrap();
    heavy.update(&[1.0, 0.0]).unwrap();

    let e_plain = plain.back_propagate(&[1.0], 0.5, 0.0).unwrap();
    let e_heavy = heavy.back_propagate(&[1.0], 0.5, 0.9).unwrap();

    assert_relative_eq!(e_plain, e_heavy);
    assert_eq!(plain.weights(), heavy.weights());
}

#[test]
fn momentum_factor_matters_from_the_second_step_on() {
    let mut plain = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 13);
    let mut heavy = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 13);

    for net_and_momentum in [(&mut plain, 0.0), (&mut heavy, 0.9)] {
        let (net, momentum) = net_and_momentum;
        for _ in 0..2 {
            net.update(&[1.0, 0.0]).unwrap();
            net.back_propagate(&[1.0], 0.5, momentum).unwrap();
        }
    }

    assert_ne!(plain.weights(), heavy.weights());
}

#[test]
fn training_step_moves_the_output_toward_the_target() {
    let mut network = Network::seeded(2, 2, 1, ActivationFunction::Tanh, 14);
    let target = [0.8];

    let before = network.update(&[1.0, 1.0]).unwrap()[0];
    network.back_propagate(&target, 0.1, 0.0).unwrap();
    let after = network.update(&[1.0, 1.0]).unwrap()[0];

    assert!((target[0] - after).abs() < (target[0] - before).abs());
}
