use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::network::metadata::{InputType, ModelMetadata};

/// Describes one layer in a network specification.
///
/// Fields of `Dense`:
/// - `size`       — number of neurons in this layer
/// - `input_size` — number of values feeding into this layer (the output
///                  size of the previous layer, or the flattened input
///                  dimension for the first dense layer)
/// - `activation` — activation function applied after the linear transform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LayerSpec {
    Flatten,
    Dense {
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
    },
}

/// A serializable description of a network architecture.
///
/// A `NetworkSpec` is turned into a [Network](crate::Network) with freshly
/// initialized weights by `Network::from_spec`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl NetworkSpec {
    /// 28×28 grayscale digit → Flatten → 25 ReLU → 25 ReLU → 10 Softmax.
    pub fn mnist_default() -> NetworkSpec {
        NetworkSpec {
            name: "2L25N_softmax".into(),
            layers: vec![
                LayerSpec::Flatten,
                LayerSpec::Dense { size: 25, input_size: 784, activation: ActivationFunction::ReLU },
                LayerSpec::Dense { size: 25, input_size: 25, activation: ActivationFunction::ReLU },
                LayerSpec::Dense { size: 10, input_size: 25, activation: ActivationFunction::Softmax },
            ],
            metadata: Some(ModelMetadata {
                description: Some("MNIST digit classifier, two hidden layers of 25".into()),
                input_type: Some(InputType::ImageGrayscale { width: 28, height: 28 }),
                output_labels: Some((0..10).map(|d| d.to_string()).collect()),
            }),
        }
    }
}
