use gatenet::{evaluate, train, ActivationFunction, Network, Pattern, TrainOptions};

// XOR again, but with the leaky-ReLU activation and an error-threshold
// early exit instead of a fixed epoch count.
fn main() -> Result<(), gatenet::NetworkError> {
    env_logger::init();

    let patterns = vec![
        Pattern::new(vec![0.0, 0.0], vec![0.0]),
        Pattern::new(vec![0.0, 1.0], vec![1.0]),
        Pattern::new(vec![1.0, 0.0], vec![1.0]),
        Pattern::new(vec![1.0, 1.0], vec![0.0]),
    ];

    let mut network = Network::new(2, 2, 1, ActivationFunction::leaky_relu());
    let options = TrainOptions::with_threshold(10_000, 0.5, 0.1, 1e-4);
    let summary = train(&mut network, &patterns, &options)?;

    if summary.converged {
        println!("converged after {} epochs", summary.epochs_run);
    } else {
        println!("stopped at the {} epoch cap", summary.epochs_run);
    }
    println!("error {:.6} -> {:.6}", summary.first_error, summary.final_error);

    println!("\nTest results:");
    for row in evaluate(&mut network, &patterns)? {
        println!("{:?} -> {:?}", row.inputs, row.predicted);
    }

    Ok(())
}
