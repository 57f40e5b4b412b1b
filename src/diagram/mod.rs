//! Layer-activation diagrams: rows of neurons colored by activation, joined
//! by faint connection lines, rendered to PNG.

pub mod adapter;
pub mod error;
pub mod layer;
pub mod network;
pub mod neuron;

pub use adapter::ActivationDiagram;
pub use error::DiagramError;
pub use layer::{Layer, LayerKind};
pub use network::NeuralNetwork;
pub use neuron::Neuron;

/// Distance between consecutive rows, in diagram units.
pub const VERTICAL_SPACING: f64 = 10.0;
/// Distance between neighbouring neurons in a row.
pub const HORIZONTAL_SPACING: f64 = 3.0;
pub const NEURON_RADIUS: f64 = 1.5;
/// Neuron outline width, in points.
pub const OUTLINE_WIDTH: f64 = 1.5;
/// Connection line width, in points.
pub const LINE_WIDTH: f64 = 1.0;
pub const LINE_ALPHA: f64 = 0.1;
pub const LABEL_SIZE: f64 = 12.0;
pub const INDEX_LABEL_SIZE: f64 = 15.0;

/// Rendered image size in pixels (10 × 8 inches at 100 dpi).
pub const FIGURE_WIDTH: u32 = 1000;
pub const FIGURE_HEIGHT: u32 = 800;
