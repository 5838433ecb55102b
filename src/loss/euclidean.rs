/// Distance between a prediction and its label, paired with the gradient of
/// half the squared distance.
pub struct EuclideanLoss;

impl EuclideanLoss {
    /// Scalar error: sqrt(Σ (expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        expected.iter().zip(predicted.iter())
            .map(|(e, p)| (e - p).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Per-output gradient of ½‖predicted - expected‖²: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect()
    }
}
