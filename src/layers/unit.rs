use crate::activation::{sigmoid, sigmoid_derivative};
use crate::error::NetworkError;
use rand::Rng;

/// A single weighted-sum-plus-sigmoid node.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    weights: Vec<f64>,
}

impl Unit {
    /// Creates a unit of arity `input_size` with weights drawn uniformly from [-0.5, 0.5).
    pub fn new<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Unit {
        let mut weights = vec![0.0; input_size];
        for w in weights.iter_mut() {
            *w = rng.gen::<f64>() - 0.5;
        }

        Unit { weights }
    }

    /// Creates a unit from explicit weights.
    pub fn from_weights(weights: Vec<f64>) -> Unit {
        Unit { weights }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns `sigmoid(weights · input)`.
    pub fn activate(&self, input: &[f64]) -> Result<f64, NetworkError> {
        NetworkError::check_len(self.weights.len(), input.len())?;
        let z: f64 = self.weights.iter().zip(input).map(|(w, x)| w * x).sum();
        Ok(sigmoid(z))
    }

    /// The slope of the activation at the point where it produced `activation`.
    pub fn derivative(activation: f64) -> f64 {
        sigmoid_derivative(activation)
    }

    /// Gradient-descent step: `w[i] -= eta * delta * input[i]`.
    ///
    /// `input` must be the vector that produced the activation `delta` was derived from.
    /// Nothing changes unless it matches the unit's arity.
    pub fn update_weights(
        &mut self,
        input: &[f64],
        delta: f64,
        eta: f64,
    ) -> Result<(), NetworkError> {
        NetworkError::check_len(self.weights.len(), input.len())?;
        for (w, x) in self.weights.iter_mut().zip(input) {
            *w -= eta * delta * x;
        }

        Ok(())
    }
}
