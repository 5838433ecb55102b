use crate::arm::kinematics::{Angles, ArmPose, Point};
use rand::Rng;
use std::f64::consts::PI;

/// An arm configuration and the point its end effector reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmSample {
    pub point: Point,
    pub angles: Angles,
}

/// Samples random configurations of a two-segment arm anchored at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmGenerator {
    pub arm_length: f64,
    pub center: Point,
}

impl ArmGenerator {
    pub fn new(arm_length: f64, center: Point) -> ArmGenerator {
        ArmGenerator { arm_length, center }
    }

    /// Draws `count` independent samples.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<ArmSample> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Draws both angles uniformly from [0, π) and places the end effector.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ArmSample {
        let angles = Angles {
            alpha: rng.gen::<f64>() * PI,
            beta: rng.gen::<f64>() * PI,
        };

        ArmSample {
            point: ArmPose::from_angles(self.center, angles, self.arm_length).end,
            angles,
        }
    }
}

impl Default for ArmGenerator {
    fn default() -> Self {
        ArmGenerator::new(10.0, Point::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use test_strategy::proptest;

    #[proptest]
    fn generates_requested_number_of_samples(#[strategy(0usize..100)] count: usize, seed: u64) {
        let samples = ArmGenerator::default().generate(count, &mut StdRng::seed_from_u64(seed));
        assert_eq!(samples.len(), count);
    }

    #[proptest]
    fn samples_stay_within_reach(seed: u64) {
        let generator = ArmGenerator::new(200.0, Point::new(400.0, 400.0));
        for s in generator.generate(32, &mut StdRng::seed_from_u64(seed)) {
            assert!((0.0..PI).contains(&s.angles.alpha));
            assert!((0.0..PI).contains(&s.angles.beta));
            assert!(s.point.distance(generator.center) <= 400.0 + 1e-9);
        }
    }

    #[test]
    fn same_seed_reproduces_samples() {
        let generator = ArmGenerator::default();
        assert_eq!(
            generator.generate(8, &mut StdRng::seed_from_u64(42)),
            generator.generate(8, &mut StdRng::seed_from_u64(42))
        );
    }
}
