use crate::{error::NetworkError, layers::unit::Unit};
use rand::Rng;

/// An ordered set of units sharing one input vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    input_size: usize,
    units: Vec<Unit>,
}

impl Layer {
    /// Builds `size` units, each of arity `input_size`.
    pub fn new<R: Rng + ?Sized>(input_size: usize, size: usize, rng: &mut R) -> Layer {
        let units = (0..size).map(|_| Unit::new(input_size, rng)).collect();
        Layer { input_size, units }
    }

    /// Builds a layer from explicit units, which must be non-empty and share one arity.
    pub fn from_units(units: Vec<Unit>) -> Result<Layer, NetworkError> {
        let input_size = units.first().ok_or(NetworkError::InvalidShape)?.input_size();
        if input_size == 0 || units.iter().any(|u| u.input_size() != input_size) {
            return Err(NetworkError::InvalidShape);
        }

        Ok(Layer { input_size, units })
    }

    pub fn size(&self) -> usize {
        self.units.len()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Activates every unit with `input`, in unit order.
    pub fn propagate(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        NetworkError::check_len(self.input_size, input.len())?;
        self.units.iter().map(|u| u.activate(input)).collect()
    }

    /// Pulls `deltas` back through this layer's weights.
    ///
    /// Entry `j` of the result is `Σ_k w[k][j] * deltas[k]`, the error signal reaching
    /// input `j`. It still has to be scaled by the upstream unit's own derivative.
    pub fn backpropagate(&self, deltas: &[f64]) -> Vec<f64> {
        debug_assert_eq!(self.units.len(), deltas.len());
        let mut upstream = vec![0.0; self.input_size];
        for (unit, delta) in self.units.iter().zip(deltas) {
            for (u, w) in upstream.iter_mut().zip(unit.weights()) {
                *u += w * delta;
            }
        }

        upstream
    }

    /// Relays one weight update per unit, each scaled by that unit's delta.
    ///
    /// Both `input` and `deltas` are checked before any unit is touched.
    pub fn apply_updates(
        &mut self,
        input: &[f64],
        deltas: &[f64],
        eta: f64,
    ) -> Result<(), NetworkError> {
        NetworkError::check_len(self.input_size, input.len())?;
        NetworkError::check_len(self.units.len(), deltas.len())?;
        for (unit, &delta) in self.units.iter_mut().zip(deltas) {
            unit.update_weights(input, delta, eta)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::sigmoid;
    use rand::{rngs::StdRng, SeedableRng};
    use test_strategy::proptest;

    fn layer() -> Layer {
        Layer::from_units(vec![
            Unit::from_weights(vec![0.1, -0.2]),
            Unit::from_weights(vec![0.3, 0.4]),
            Unit::from_weights(vec![-0.5, 0.0]),
        ])
        .unwrap()
    }

    #[proptest]
    fn new_builds_requested_number_of_units(
        #[strategy(1usize..16)] input_size: usize,
        #[strategy(1usize..16)] size: usize,
        seed: u64,
    ) {
        let layer = Layer::new(input_size, size, &mut StdRng::seed_from_u64(seed));
        assert_eq!(layer.size(), size);
        assert!(layer.units().iter().all(|u| u.input_size() == input_size));
    }

    #[test]
    fn from_units_rejects_empty_and_ragged_layers() {
        assert_eq!(Layer::from_units(vec![]), Err(NetworkError::InvalidShape));
        assert_eq!(
            Layer::from_units(vec![
                Unit::from_weights(vec![0.1]),
                Unit::from_weights(vec![0.1, 0.2]),
            ]),
            Err(NetworkError::InvalidShape)
        );
    }

    #[test]
    fn propagate_returns_activations_in_unit_order() {
        let out = layer().propagate(&[1.0, 2.0]).unwrap();
        let expected = [sigmoid(-0.3), sigmoid(1.1), sigmoid(-0.5)];
        assert_eq!(out.len(), 3);
        for (o, e) in out.iter().zip(expected) {
            assert!((o - e).abs() < 1e-12);
        }
    }

    #[test]
    fn propagate_rejects_input_of_wrong_length() {
        assert_eq!(
            layer().propagate(&[1.0, 2.0, 3.0]),
            Err(NetworkError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn backpropagate_transposes_weights() {
        let upstream = layer().backpropagate(&[1.0, 2.0, 3.0]);
        assert!((upstream[0] - (0.1 + 0.6 - 1.5)).abs() < 1e-12);
        assert!((upstream[1] - (-0.2 + 0.8)).abs() < 1e-12);
    }

    #[test]
    fn apply_updates_uses_each_units_own_delta() {
        let mut layer = layer();
        layer.apply_updates(&[1.0, 1.0], &[1.0, 0.0, -1.0], 0.1).unwrap();
        assert_eq!(layer.units()[1].weights(), &[0.3, 0.4]);
        assert!((layer.units()[0].weights()[0] - 0.0).abs() < 1e-12);
        assert!((layer.units()[2].weights()[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn apply_updates_rejects_short_input_without_partial_update() {
        let mut layer = Layer::from_units(vec![Unit::from_weights(vec![1.0, 1.0, 1.0])]).unwrap();
        assert_eq!(
            layer.apply_updates(&[1.0], &[1.0], 0.5),
            Err(NetworkError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
        assert_eq!(layer.units()[0].weights(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn apply_updates_requires_one_delta_per_unit() {
        let mut layer = layer();
        let before = layer.clone();
        assert_eq!(
            layer.apply_updates(&[1.0, 1.0], &[1.0, 0.0], 0.1),
            Err(NetworkError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(layer, before);
    }
}
