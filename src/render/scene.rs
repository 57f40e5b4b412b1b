use crate::render::color::Color;

/// A position in diagram units. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        fill: Color,
        edge: Color,
        /// Outline width in points.
        edge_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        /// Stroke width in points.
        width: f64,
    },
    /// Left-aligned text whose baseline sits on `anchor`.
    Text {
        anchor: Point,
        text: String,
        /// Font size in points.
        size: f64,
    },
}

/// Axis-aligned extent in diagram units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn around(p: Point, r: f64) -> Bounds {
        Bounds { min_x: p.x - r, min_y: p.y - r, max_x: p.x + r, max_y: p.y + r }
    }

    fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Display list that diagram components draw into.
///
/// A scene is created for a single render and dropped with it; nothing is
/// shared between renders.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    pub fn add_circle(&mut self, center: Point, radius: f64, fill: Color, edge: Color, edge_width: f64) {
        self.shapes.push(Shape::Circle { center, radius, fill, edge, edge_width });
    }

    pub fn add_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.shapes.push(Shape::Line { from, to, color, width });
    }

    pub fn add_text(&mut self, anchor: Point, text: impl Into<String>, size: f64) {
        self.shapes.push(Shape::Text { anchor, text: text.into(), size });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn circles(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| matches!(s, Shape::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| matches!(s, Shape::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| matches!(s, Shape::Text { .. }))
    }

    /// Extent of all geometry plus text anchors. `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        self.shapes.iter()
            .map(|shape| match shape {
                Shape::Circle { center, radius, .. } => Bounds::around(*center, *radius),
                Shape::Line { from, to, .. } => Bounds::around(*from, 0.0).union(Bounds::around(*to, 0.0)),
                Shape::Text { anchor, .. } => Bounds::around(*anchor, 0.0),
            })
            .reduce(Bounds::union)
    }
}
