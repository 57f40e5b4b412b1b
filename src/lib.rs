pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod render;
pub mod diagram;
pub mod session;
pub mod config;
pub mod util;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::{Dense, NetworkLayer};
pub use network::{Model, ModelError, ModelLayer, Network, NetworkSpec, LayerSpec};
pub use network::metadata::{InputType, ModelMetadata};
pub use diagram::{ActivationDiagram, DiagramError, NeuralNetwork};
pub use session::{DrawingGrid, Prediction, PredictionState, Predictor, Tick, Ticker};
pub use config::{AppConfig, ConfigError};
