use plotters::prelude::DrawingAreaErrorKind;
use plotters_bitmap::BitMapBackendError;
use thiserror::Error;

/// Error type for rasterizing and encoding a [Scene](crate::render::Scene).
#[derive(Error, Debug)]
pub enum RenderError {
    /// The bitmap backend rejected a drawing operation.
    #[error("drawing failed: `{0}`")]
    Plot(#[from] DrawingAreaErrorKind<BitMapBackendError>),

    /// The finished raster could not be PNG-encoded.
    #[error("PNG encoding failed: `{0}`")]
    Encode(#[from] image::ImageError),
}
