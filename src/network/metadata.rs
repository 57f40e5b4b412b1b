use serde::{Deserialize, Serialize};

/// Describes how to interpret the input fed to a Network.
/// Stored in model JSON; the shell reads this to size the drawing grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputType {
    /// A flat row of f64 values.
    Numeric,
    /// Grayscale image of width×height, normalized to [0, 1].
    ImageGrayscale { width: u32, height: u32 },
}

/// Optional annotations attached to a saved Network.
/// All fields are Option<> so models without metadata deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    pub input_type: Option<InputType>,
    /// Human-readable class labels for the output layer (e.g. ["0","1",...,"9"]).
    pub output_labels: Option<Vec<String>>,
}

impl ModelMetadata {
    /// Side length of a square grayscale input, if the model declares one.
    pub fn square_image_side(&self) -> Option<usize> {
        match self.input_type {
            Some(InputType::ImageGrayscale { width, height }) if width == height => {
                Some(width as usize)
            }
            _ => None,
        }
    }
}
