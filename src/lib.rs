pub mod activation;
pub mod arm;
pub mod error;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use error::NetworkError;
pub use layers::{dense::Layer, unit::Unit};
pub use network::{network::Network, shape::NetworkShape, trace::ForwardTrace};
pub use loss::euclidean::EuclideanLoss;
pub use optim::sgd::Sgd;
pub use train::{example::TrainingExample, train_config::TrainConfig};
