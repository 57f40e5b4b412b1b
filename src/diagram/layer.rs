use crate::diagram::error::DiagramError;
use crate::diagram::neuron::Neuron;
use crate::diagram::{
    HORIZONTAL_SPACING, INDEX_LABEL_SIZE, LABEL_SIZE, LINE_ALPHA, LINE_WIDTH, NEURON_RADIUS,
    VERTICAL_SPACING,
};
use crate::render::{Color, Point, Scene};

/// How a layer labels itself when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Zero-based position among the hidden layers; labelled one-based.
    Hidden(usize),
    /// Last layer; labelled "Output Layer" with per-neuron indices.
    Output,
}

/// One row of neurons in a network diagram.
#[derive(Debug, Clone)]
pub struct Layer {
    y: f64,
    neurons: Vec<Neuron>,
    /// Index of the previous row in the owning network, fixed at construction.
    previous: Option<usize>,
    widest_layer_count: usize,
}

impl Layer {
    /// Builds the next row after `existing`, which is the owning network's
    /// current layer list.
    ///
    /// The first `neuron_count` activations are used; a shorter vector is an error.
    pub fn new(
        existing: &[Layer],
        neuron_count: usize,
        activations: &[f64],
        widest_layer_count: usize,
    ) -> Result<Layer, DiagramError> {
        if activations.len() < neuron_count {
            return Err(DiagramError::ActivationLength {
                layer: existing.len(),
                expected: neuron_count,
                got: activations.len(),
            });
        }

        let previous = existing.len().checked_sub(1);
        let y = match existing.last() {
            Some(prev) => prev.y + VERTICAL_SPACING,
            None => 0.0,
        };

        let left = left_margin(neuron_count, widest_layer_count);
        let neurons = activations[..neuron_count].iter()
            .enumerate()
            .map(|(i, &a)| Neuron::new(left + i as f64 * HORIZONTAL_SPACING, y, a))
            .collect();

        Ok(Layer { y, neurons, previous, widest_layer_count })
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Draws neurons, connections back to the previous row, and the label.
    /// `layers` is the owning network's layer list, used to resolve `previous`.
    pub fn draw(&self, layers: &[Layer], kind: LayerKind, scene: &mut Scene) {
        let previous = self.previous.and_then(|i| layers.get(i));

        for neuron in &self.neurons {
            neuron.draw(NEURON_RADIUS, scene);
            if let Some(prev) = previous {
                for prev_neuron in &prev.neurons {
                    line_between(neuron, prev_neuron, scene);
                }
            }
        }

        let label_anchor = Point::new(self.widest_layer_count as f64 * HORIZONTAL_SPACING, self.y);
        match kind {
            LayerKind::Output => {
                scene.add_text(label_anchor, "Output Layer", LABEL_SIZE);
                for (idx, neuron) in self.neurons.iter().enumerate() {
                    let anchor = Point::new(
                        neuron.x - NEURON_RADIUS / 2.0,
                        neuron.y + NEURON_RADIUS * 1.5,
                    );
                    scene.add_text(anchor, idx.to_string(), INDEX_LABEL_SIZE);
                }
            }
            LayerKind::Hidden(index) => {
                scene.add_text(label_anchor, format!("Hidden Layer {}", index + 1), LABEL_SIZE);
            }
        }
    }
}

/// Left edge that centres `count` neurons within the widest row.
/// A row wider than `widest` gets a negative margin.
fn left_margin(count: usize, widest: usize) -> f64 {
    HORIZONTAL_SPACING * (widest as f64 - count as f64) / 2.0
}

/// Segment between the two neurons' rims, each end pulled in by the radius
/// toward the other neuron.
fn line_between(from: &Neuron, to: &Neuron, scene: &mut Scene) {
    let (start_y, end_y) = if to.y > from.y {
        (from.y + NEURON_RADIUS, to.y - NEURON_RADIUS)
    } else {
        (from.y - NEURON_RADIUS, to.y + NEURON_RADIUS)
    };
    scene.add_line(
        Point::new(from.x, start_y),
        Point::new(to.x, end_y),
        Color::rgba(0.0, 0.0, 1.0, LINE_ALPHA),
        LINE_WIDTH,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shape;

    #[test]
    fn first_layer_sits_at_origin_without_previous() {
        let layer = Layer::new(&[], 3, &[0.1, 0.2, 0.3], 3).unwrap();
        assert_eq!(layer.y(), 0.0);
        assert_eq!(layer.previous(), None);
        let xs: Vec<f64> = layer.neurons().iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn narrower_layer_is_centred() {
        let first = Layer::new(&[], 4, &[0.0; 4], 4).unwrap();
        let second = Layer::new(std::slice::from_ref(&first), 3, &[0.0; 3], 4).unwrap();
        assert_eq!(second.previous(), Some(0));
        assert_eq!(second.y(), VERTICAL_SPACING);
        let xs: Vec<f64> = second.neurons().iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![1.5, 4.5, 7.5]);

        let midpoint = HORIZONTAL_SPACING * 3.0 / 2.0;
        assert!((xs[0] + xs[2] - 2.0 * midpoint).abs() < 1e-12);
    }

    #[test]
    fn short_activation_vector_is_rejected() {
        let err = Layer::new(&[], 3, &[0.5, 0.5], 3).unwrap_err();
        assert!(matches!(err, DiagramError::ActivationLength { layer: 0, expected: 3, got: 2 }));
    }

    #[test]
    fn extra_activations_are_ignored() {
        let layer = Layer::new(&[], 2, &[0.1, 0.2, 0.9], 2).unwrap();
        assert_eq!(layer.neurons().len(), 2);
    }

    #[test]
    fn wider_than_widest_gets_negative_margin() {
        let layer = Layer::new(&[], 4, &[0.0; 4], 2).unwrap();
        assert_eq!(layer.neurons()[0].x, -3.0);
    }

    #[test]
    fn connection_lines_run_between_rims() {
        let first = Layer::new(&[], 1, &[0.0], 1).unwrap();
        let layers = vec![first.clone(), Layer::new(&[first], 1, &[1.0], 1).unwrap()];
        let mut scene = Scene::new();
        layers[1].draw(&layers, LayerKind::Output, &mut scene);

        let lines: Vec<&Shape> = scene.lines().collect();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            Shape::Line { from, to, color, .. } => {
                assert_eq!(*from, Point::new(0.0, VERTICAL_SPACING - NEURON_RADIUS));
                assert_eq!(*to, Point::new(0.0, NEURON_RADIUS));
                assert_eq!(color.a, LINE_ALPHA);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    fn labels(scene: &Scene) -> Vec<String> {
        scene.texts()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn hidden_label_is_one_based() {
        let layer = Layer::new(&[], 2, &[0.0, 0.0], 2).unwrap();
        let mut scene = Scene::new();
        layer.draw(std::slice::from_ref(&layer), LayerKind::Hidden(0), &mut scene);
        assert_eq!(labels(&scene), vec!["Hidden Layer 1"]);
        assert_eq!(scene.lines().count(), 0);
    }

    #[test]
    fn output_label_includes_neuron_indices() {
        let layer = Layer::new(&[], 3, &[0.0; 3], 3).unwrap();
        let mut scene = Scene::new();
        layer.draw(std::slice::from_ref(&layer), LayerKind::Output, &mut scene);
        assert_eq!(labels(&scene), vec!["Output Layer", "0", "1", "2"]);
    }
}
