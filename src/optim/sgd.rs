use crate::{error::NetworkError, layers::dense::Layer};

/// Plain stochastic gradient descent; one update per example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to a layer given the input it saw and its units' deltas.
    pub fn step(
        &self,
        layer: &mut Layer,
        input: &[f64],
        deltas: &[f64],
    ) -> Result<(), NetworkError> {
        layer.apply_updates(input, deltas, self.learning_rate)
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(Sgd::DEFAULT_LEARNING_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::unit::Unit;

    #[test]
    fn step_scales_update_by_learning_rate() {
        let mut layer = Layer::from_units(vec![Unit::from_weights(vec![1.0, 1.0])]).unwrap();
        Sgd::new(0.5).step(&mut layer, &[1.0, 0.0], &[1.0]).unwrap();
        assert_eq!(layer.units()[0].weights(), &[0.5, 1.0]);
    }

    #[test]
    fn step_surfaces_dimension_mismatch() {
        let mut layer = Layer::from_units(vec![Unit::from_weights(vec![1.0, 1.0])]).unwrap();
        assert_eq!(
            Sgd::new(0.5).step(&mut layer, &[1.0, 0.0], &[1.0, 1.0]),
            Err(NetworkError::DimensionMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn default_learning_rate_is_one_hundredth() {
        assert_eq!(Sgd::default().learning_rate, 0.01);
    }
}
