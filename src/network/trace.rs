/// What one layer saw and produced during a forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTrace {
    input: Vec<f64>,
    activations: Vec<f64>,
}

impl LayerTrace {
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn activations(&self) -> &[f64] {
        &self.activations
    }
}

/// The record of one forward pass, consumed by [`Network::backward`].
///
/// A trace is bound to the weights that produced it: once the network is
/// updated, older traces are rejected.
///
/// [`Network::backward`]: crate::network::Network::backward
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrace {
    stamp: u64,
    layers: Vec<LayerTrace>,
}

impl ForwardTrace {
    pub(crate) fn new(stamp: u64) -> ForwardTrace {
        ForwardTrace {
            stamp,
            layers: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, input: Vec<f64>, activations: Vec<f64>) {
        self.layers.push(LayerTrace { input, activations });
    }

    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    /// Per-layer records, input layer first.
    pub fn layers(&self) -> &[LayerTrace] {
        &self.layers
    }

    /// The activations of the last layer.
    pub fn output(&self) -> &[f64] {
        self.layers.last().map_or(&[][..], |l| l.activations.as_slice())
    }

    pub fn into_output(mut self) -> Vec<f64> {
        self.layers.pop().map(|l| l.activations).unwrap_or_default()
    }
}
