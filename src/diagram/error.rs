use thiserror::Error;

use crate::network::error::ModelError;
use crate::render::RenderError;

/// Error type for building and rendering a network diagram.
#[derive(Error, Debug)]
pub enum DiagramError {
    /// Nothing to lay out.
    #[error("diagram has no layers")]
    EmptyNetwork,

    /// A layer was given fewer activations than it has neurons.
    #[error("layer {layer} has {expected} neurons but only {got} activations")]
    ActivationLength { layer: usize, expected: usize, got: usize },

    /// The model failed while producing activations.
    #[error("model evaluation failed: {0}")]
    Model(#[from] ModelError),

    /// The scene could not be rasterized or encoded.
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}
