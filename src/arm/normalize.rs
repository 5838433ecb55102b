use crate::arm::{
    generator::ArmSample,
    kinematics::{Angles, Point},
};
use crate::{error::NetworkError, train::example::TrainingExample};
use std::f64::consts::PI;

/// Lower bound of the encoded range; keeps targets off the sigmoid's flat tails.
const LOW: f64 = 0.1;
/// Width of the encoded range, `[LOW, LOW + SPAN]`.
const SPAN: f64 = 0.8;

/// Maps arm coordinates and angles into `[0.1, 0.9]` and back.
///
/// Both coordinates share one scale, fitted on the training samples: a
/// coordinate `v` becomes `((v - min) / max) * 0.8 + 0.1`, where `min` and
/// `max` are taken over every x and y seen. Angles in `[0, π)` map linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    min: f64,
    max: f64,
}

impl Normalizer {
    pub fn fit(samples: &[ArmSample]) -> Result<Normalizer, NetworkError> {
        let coords = samples.iter().flat_map(|s| [s.point.x, s.point.y]);
        let (min, max) = coords.fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or(NetworkError::EmptyDataset)?;

        Ok(Normalizer { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn scale(&self) -> f64 {
        if self.max == 0.0 {
            1.0
        } else {
            self.max
        }
    }

    pub fn encode_point(&self, point: Point) -> Vec<f64> {
        [point.x, point.y]
            .iter()
            .map(|v| (v - self.min) / self.scale() * SPAN + LOW)
            .collect()
    }

    pub fn encode_angles(&self, angles: Angles) -> Vec<f64> {
        vec![angles.alpha / PI * SPAN + LOW, angles.beta / PI * SPAN + LOW]
    }

    /// Inverse of [`Normalizer::encode_angles`], applied to a network output.
    pub fn decode_angles(&self, output: &[f64]) -> Result<Angles, NetworkError> {
        match *output {
            [alpha, beta] => Ok(Angles {
                alpha: (alpha - LOW) / SPAN * PI,
                beta: (beta - LOW) / SPAN * PI,
            }),
            _ => Err(NetworkError::DimensionMismatch {
                expected: 2,
                found: output.len(),
            }),
        }
    }

    pub fn to_example(&self, sample: &ArmSample) -> TrainingExample {
        TrainingExample::new(self.encode_point(sample.point), self.encode_angles(sample.angles))
    }

    pub fn to_examples(&self, samples: &[ArmSample]) -> Vec<TrainingExample> {
        samples.iter().map(|s| self.to_example(s)).collect()
    }
}
