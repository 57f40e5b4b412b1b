use crate::math::matrix::Matrix;
use crate::network::error::ModelError;

/// One step of a classifier: a function from a batch to a batch.
pub trait ModelLayer {
    fn call(&self, input: &Matrix) -> Result<Matrix, ModelError>;
}

/// Anything exposing an ordered list of callable layers, input to output.
///
/// Only forward evaluation is needed; the diagram adapter feeds each
/// layer's output into the next and records every intermediate result.
pub trait Model {
    type Layer: ModelLayer;

    fn layers(&self) -> &[Self::Layer];
}
