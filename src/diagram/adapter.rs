use std::io::Cursor;

use tracing::debug;

use crate::diagram::error::DiagramError;
use crate::diagram::network::NeuralNetwork;
use crate::math::matrix::Matrix;
use crate::network::model::{Model, ModelLayer};

/// Runs a model once and keeps what each layer produced, ready to be drawn.
///
/// The first model layer's output is left out of both the widths and the
/// activations; for a digit classifier that layer is the flattening step,
/// whose 784 values would swamp the diagram.
#[derive(Debug, Clone)]
pub struct ActivationDiagram {
    widths: Vec<usize>,
    activations: Vec<Vec<f64>>,
}

impl ActivationDiagram {
    pub fn trace<M: Model>(model: &M, input: &Matrix) -> Result<ActivationDiagram, DiagramError> {
        let layers = model.layers();
        let mut outputs: Vec<Matrix> = Vec::with_capacity(layers.len());
        let mut widths = Vec::with_capacity(layers.len().saturating_sub(1));

        let mut current = input.clone();
        for (i, layer) in layers.iter().enumerate() {
            current = layer.call(&current).map_err(|e| e.at_layer(i))?;
            if i > 0 {
                widths.push(current.cols);
            }
            outputs.push(current.clone());
        }

        let activations = outputs[outputs.len() - widths.len()..].iter()
            .map(|out| if out.rows > 0 { out.row(0).to_vec() } else { Vec::new() })
            .collect();

        debug!(?widths, "traced model activations");
        Ok(ActivationDiagram { widths, activations })
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn activations(&self) -> &[Vec<f64>] {
        &self.activations
    }

    /// Index of the largest value in the final layer.
    pub fn predicted_class(&self) -> Option<usize> {
        self.activations.last()?
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }

    /// One diagram row per recorded layer, centred on the widest.
    pub fn network(&self) -> Result<NeuralNetwork, DiagramError> {
        let widest = *self.widths.iter().max().ok_or(DiagramError::EmptyNetwork)?;
        let mut network = NeuralNetwork::new(widest);
        for (&width, activation) in self.widths.iter().zip(&self.activations) {
            network.add_layer(width, activation)?;
        }
        Ok(network)
    }

    pub fn draw(&self) -> Result<Cursor<Vec<u8>>, DiagramError> {
        self.network()?.draw()
    }
}
