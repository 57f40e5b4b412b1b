use std::io::Cursor;

use tracing::debug;

use crate::diagram::error::DiagramError;
use crate::diagram::layer::{Layer, LayerKind};
use crate::diagram::{FIGURE_HEIGHT, FIGURE_WIDTH};
use crate::render::{Canvas, Scene};

/// An ordered stack of diagram rows, appended input to output.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    widest_layer_count: usize,
    layers: Vec<Layer>,
}

impl NeuralNetwork {
    pub fn new(widest_layer_count: usize) -> NeuralNetwork {
        NeuralNetwork { widest_layer_count, layers: Vec::new() }
    }

    pub fn widest_layer_count(&self) -> usize {
        self.widest_layer_count
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Appends a row stacked on top of the current last one.
    pub fn add_layer(&mut self, neuron_count: usize, activations: &[f64]) -> Result<(), DiagramError> {
        let layer = Layer::new(&self.layers, neuron_count, activations, self.widest_layer_count)?;
        self.layers.push(layer);
        Ok(())
    }

    /// Draws every row into a fresh scene. Only the last row is the output.
    pub fn compose(&self) -> Result<Scene, DiagramError> {
        if self.layers.is_empty() {
            return Err(DiagramError::EmptyNetwork);
        }

        let mut scene = Scene::new();
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            let kind = if i == last { LayerKind::Output } else { LayerKind::Hidden(i) };
            layer.draw(&self.layers, kind, &mut scene);
        }
        debug!(
            layers = self.layers.len(),
            shapes = scene.shapes().len(),
            "composed network diagram"
        );
        Ok(scene)
    }

    /// Renders the diagram to PNG. The returned cursor is at offset 0.
    pub fn draw(&self) -> Result<Cursor<Vec<u8>>, DiagramError> {
        let scene = self.compose()?;
        let canvas = Canvas::render(&scene, FIGURE_WIDTH, FIGURE_HEIGHT)?;
        let png = canvas.encode_png()?;
        Ok(Cursor::new(png))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::VERTICAL_SPACING;
    use crate::render::Shape;

    fn sample() -> NeuralNetwork {
        let mut network = NeuralNetwork::new(4);
        network.add_layer(4, &[0.1, 0.2, 0.3, 0.4]).unwrap();
        network.add_layer(3, &[0.0, 0.5, 1.0]).unwrap();
        network.add_layer(2, &[0.9, 0.1]).unwrap();
        network
    }

    #[test]
    fn connection_count_is_sum_of_adjacent_products() {
        let scene = sample().compose().unwrap();
        assert_eq!(scene.lines().count(), 4 * 3 + 3 * 2);
        assert_eq!(scene.circles().count(), 4 + 3 + 2);
    }

    #[test]
    fn hidden_rows_are_numbered_from_one() {
        let scene = sample().compose().unwrap();
        let labels: Vec<&str> = scene.texts()
            .filter_map(|shape| match shape {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Hidden Layer 1", "Hidden Layer 2", "Output Layer", "0", "1"]);
    }

    #[test]
    fn rows_are_evenly_spaced() {
        let network = sample();
        for pair in network.layers().windows(2) {
            assert_eq!(pair[1].y() - pair[0].y(), VERTICAL_SPACING);
        }
    }

    #[test]
    fn margins_follow_width_difference() {
        let network = sample();
        assert_eq!(network.widest_layer_count(), 4);
        assert_eq!(network.layers()[0].neurons()[0].x, 0.0);
        assert_eq!(network.layers()[1].neurons()[0].x, 1.5);
        assert_eq!(network.layers()[2].neurons()[0].x, 3.0);
    }

    #[test]
    fn empty_network_is_rejected() {
        assert!(matches!(NeuralNetwork::new(3).compose(), Err(DiagramError::EmptyNetwork)));
        assert!(matches!(NeuralNetwork::new(3).draw(), Err(DiagramError::EmptyNetwork)));
    }

    #[test]
    fn draw_returns_rewound_png() {
        let cursor = sample().draw().unwrap();
        assert_eq!(cursor.position(), 0);
        let img = image::load_from_memory(cursor.get_ref()).unwrap();
        assert_eq!((img.width(), img.height()), (FIGURE_WIDTH, FIGURE_HEIGHT));
    }
}
