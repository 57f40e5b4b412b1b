use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::layers::dense::{Dense, NetworkLayer};
use crate::math::matrix::Matrix;
use crate::network::error::ModelError;
use crate::network::metadata::ModelMetadata;
use crate::network::model::{Model, ModelLayer};
use crate::network::spec::{LayerSpec, NetworkSpec};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub name: String,
    pub layers: Vec<NetworkLayer>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl Network {
    /// Builds a network with freshly initialized weights from an architecture spec.
    pub fn from_spec(spec: &NetworkSpec) -> Network {
        let layers = spec.layers.iter()
            .map(|layer| match layer {
                LayerSpec::Flatten => NetworkLayer::Flatten,
                LayerSpec::Dense { size, input_size, activation } => {
                    NetworkLayer::Dense(Dense::new(*size, *input_size, activation.clone()))
                }
            })
            .collect();
        Network {
            name: spec.name.clone(),
            layers,
            metadata: spec.metadata.clone(),
        }
    }

    /// Forward pass through every layer.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix, ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::Empty);
        }
        self.layers.iter()
            .enumerate()
            .try_fold(input.clone(), |current, (i, layer)| layer.call(&current).map_err(|e| e.at_layer(i)))
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    /// Dense layers whose stored shapes disagree are rejected here rather
    /// than at inference time.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Network, ModelError> {
        let file = std::fs::File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        if network.layers.is_empty() {
            return Err(ModelError::Empty);
        }
        for (i, layer) in network.layers.iter().enumerate() {
            if let NetworkLayer::Dense(dense) = layer {
                dense.validate().map_err(|e| e.at_layer(i))?;
            }
        }
        debug!(path = %path.as_ref().display(), layers = network.layers.len(), "loaded model");
        Ok(network)
    }
}

impl Model for Network {
    type Layer = NetworkLayer;

    fn layers(&self) -> &[NetworkLayer] {
        &self.layers
    }
}
