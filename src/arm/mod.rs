//! The two-segment planar arm whose inverse kinematics the network learns.

pub mod generator;
pub mod kinematics;
pub mod normalize;

pub use generator::{ArmGenerator, ArmSample};
pub use kinematics::{Angles, ArmPose, Point};
pub use normalize::Normalizer;
