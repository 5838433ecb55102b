pub mod euclidean;

pub use euclidean::EuclideanLoss;
