use gatenet::{evaluate, train, ActivationFunction, Network, Pattern, TrainOptions};

fn main() -> Result<(), gatenet::NetworkError> {
    env_logger::init();

    let patterns = vec![
        Pattern::new(vec![0.0, 0.0], vec![0.0]),
        Pattern::new(vec![0.0, 1.0], vec![1.0]),
        Pattern::new(vec![1.0, 0.0], vec![1.0]),
        Pattern::new(vec![1.0, 1.0], vec![0.0]),
    ];

    let mut network = Network::new(2, 2, 1, ActivationFunction::Tanh);
    let summary = train(&mut network, &patterns, &TrainOptions::new(1000, 0.5, 0.1))?;
    println!(
        "trained {} epochs, error {:.6} -> {:.6}",
        summary.epochs_run, summary.first_error, summary.final_error
    );

    println!("\nTest results:");
    for row in evaluate(&mut network, &patterns)? {
        println!("{:?} -> {:?}", row.inputs, row.predicted);
    }

    let (input_weights, output_weights) = network.weights();
    println!("\nInput weights:\n{input_weights}");
    println!("Output weights:\n{output_weights}");

    Ok(())
}
