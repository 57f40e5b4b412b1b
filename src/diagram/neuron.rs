use crate::diagram::OUTLINE_WIDTH;
use crate::render::{Color, Point, Scene};

/// One unit of a diagram row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neuron {
    pub x: f64,
    pub y: f64,
    pub activation: f64,
}

impl Neuron {
    pub fn new(x: f64, y: f64, activation: f64) -> Neuron {
        Neuron { x, y, activation }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Above 1 saturates to opaque blue, below 0 is red with opacity
    /// `|activation|`, anything else is green with opacity `activation`.
    /// Values are not clamped.
    pub fn fill_color(&self) -> Color {
        if self.activation > 1.0 {
            Color::rgba(0.0, 0.0, 1.0, 1.0)
        } else if self.activation < 0.0 {
            Color::rgba(1.0, 0.0, 0.0, self.activation.abs())
        } else {
            Color::rgba(0.0, 1.0, 0.0, self.activation)
        }
    }

    pub fn draw(&self, radius: f64, scene: &mut Scene) {
        scene.add_circle(self.position(), radius, self.fill_color(), Color::BLACK, OUTLINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(a: f64) -> Color {
        Neuron::new(0.0, 0.0, a).fill_color()
    }

    #[test]
    fn unit_interval_is_green_with_matching_opacity() {
        for a in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(fill(a), Color::rgba(0.0, 1.0, 0.0, a));
        }
    }

    #[test]
    fn negative_is_red_with_absolute_opacity() {
        assert_eq!(fill(-0.3), Color::rgba(1.0, 0.0, 0.0, 0.3));
        assert_eq!(fill(-2.0), Color::rgba(1.0, 0.0, 0.0, 2.0));
    }

    #[test]
    fn overflow_is_opaque_blue() {
        assert_eq!(fill(1.0001), Color::rgba(0.0, 0.0, 1.0, 1.0));
        assert_eq!(fill(42.0), Color::rgba(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn draw_adds_one_outlined_circle() {
        let mut scene = Scene::new();
        Neuron::new(3.0, 10.0, 0.5).draw(1.5, &mut scene);
        assert_eq!(scene.circles().count(), 1);
        match &scene.shapes()[0] {
            crate::render::Shape::Circle { center, radius, edge, .. } => {
                assert_eq!(*center, Point::new(3.0, 10.0));
                assert_eq!(*radius, 1.5);
                assert_eq!(*edge, Color::BLACK);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }
}
