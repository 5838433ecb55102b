use armnet::{Network, NetworkShape, Sgd, TrainConfig, TrainingExample};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), armnet::NetworkError> {
    let shape = NetworkShape::new(2, &[3], 1);
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::with_optimizer(&shape, Sgd::new(0.5), &mut rng)?;

    let examples = vec![
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
    ];

    network.train_with(&examples, &TrainConfig::default())?;

    for (epoch, error) in network.error_values().iter().enumerate().step_by(1000) {
        println!("Epoch {epoch}: error = {error:.6}");
    }

    for example in &examples {
        let output = network.forward(&example.input)?;
        println!("Input: {:?} -> Output: {:.4}", example.input, output[0]);
    }

    Ok(())
}
