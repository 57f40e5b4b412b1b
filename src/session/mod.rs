//! Interactive drawing session, independent of any GUI toolkit: the paint
//! grid, the poll clock and the background prediction worker.

pub mod grid;
pub mod predictor;
pub mod ticker;

pub use grid::DrawingGrid;
pub use predictor::{Prediction, PredictionState, Predictor, Tick};
pub use ticker::Ticker;
