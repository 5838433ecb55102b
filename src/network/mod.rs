pub mod network;
pub mod shape;
pub mod trace;

pub use network::Network;
pub use shape::{HiddenLayer, NetworkShape};
pub use trace::{ForwardTrace, LayerTrace};
