use serde::{Deserialize, Serialize};
use std::path::Path;

/// One hidden layer in a network shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenLayer {
    pub layer_size: usize,
}

/// A serializable description of a network's architecture.
///
/// Fields:
/// - `input_count`   — length of the input vector
/// - `hidden_layers` — ordered hidden layer sizes (input → output); may be empty
/// - `output_count`  — length of the output vector
///
/// In JSON the keys are camel-cased:
///
/// ```json
/// { "inputCount": 2, "hiddenLayers": [{ "layerSize": 10 }], "outputCount": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkShape {
    pub input_count: usize,
    #[serde(default)]
    pub hidden_layers: Vec<HiddenLayer>,
    pub output_count: usize,
}

impl NetworkShape {
    pub fn new(input_count: usize, hidden: &[usize], output_count: usize) -> NetworkShape {
        NetworkShape {
            input_count,
            hidden_layers: hidden.iter().map(|&layer_size| HiddenLayer { layer_size }).collect(),
            output_count,
        }
    }

    /// Every layer boundary, from the input through the hidden layers to the output.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(self.input_count);
        sizes.extend(self.hidden_layers.iter().map(|h| h.layer_size));
        sizes.push(self.output_count);
        sizes
    }

    /// Parses a shape from a JSON string.
    pub fn from_json_str(s: &str) -> serde_json::Result<NetworkShape> {
        serde_json::from_str(s)
    }

    /// Deserializes a `NetworkShape` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<NetworkShape> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
