use thiserror::Error;

/// Error type for loading and evaluating a [Network](crate::Network).
#[derive(Error, Debug)]
pub enum ModelError {
    /// I/O operation error.
    #[error("I/O error: `{0}`")]
    Io(#[from] std::io::Error),

    /// Model file is not valid network JSON.
    #[error("invalid model JSON: `{0}`")]
    Json(#[from] serde_json::Error),

    /// A layer's input or stored parameters have the wrong size. `layer` is
    /// the position in the model; a layer on its own reports 0.
    #[error("shape mismatch at layer {layer}: expected {expected} values, got {got}")]
    Shape { layer: usize, expected: usize, got: usize },

    /// Model has no layers to evaluate.
    #[error("model has no layers")]
    Empty,
}

impl ModelError {
    /// Records which model layer raised a shape error.
    pub fn at_layer(self, index: usize) -> ModelError {
        match self {
            ModelError::Shape { expected, got, .. } => ModelError::Shape { layer: index, expected, got },
            other => other,
        }
    }
}
