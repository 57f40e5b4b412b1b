use std::ops::Range;

use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, Rgba, RgbaImage};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{BitMapBackend, Circle, DrawingArea, IntoDrawingArea, PathElement, ShapeStyle, WHITE};

use crate::render::color::Color;
use crate::render::error::RenderError;
use crate::render::font;
use crate::render::scene::{Point, Scene, Shape};

/// Output resolution; sizes given in points convert at this rate.
pub const DPI: f64 = 100.0;
/// Blank border kept around the content, in pixels.
const PADDING: f64 = 12.0;

pub fn points_to_px(pt: f64) -> f64 {
    pt * DPI / 72.0
}

/// Maps diagram units to pixels with equal scaling on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    left: f64,
    top: f64,
    min_x: f64,
    max_y: f64,
}

impl Viewport {
    /// Largest equal-axis scale at which the scene, including its labels,
    /// fits in `width × height`, centred.
    pub fn fit(scene: &Scene, width: u32, height: u32) -> Viewport {
        let Some(bounds) = scene.bounds() else {
            return Viewport { scale: 1.0, left: PADDING, top: PADDING, min_x: 0.0, max_y: 0.0 };
        };

        // (anchor x, pixel width, pixel height) of each label.
        let labels: Vec<(f64, f64, f64)> = scene.texts()
            .filter_map(|shape| match shape {
                Shape::Text { anchor, text, size } => {
                    let scale = font::scale_for(*size);
                    Some((
                        anchor.x,
                        font::text_width(text, scale) as f64,
                        font::text_height(scale) as f64,
                    ))
                }
                _ => None,
            })
            .collect();

        let avail_w = width as f64 - 2.0 * PADDING;
        let avail_h = height as f64 - 2.0 * PADDING;
        let text_h = labels.iter().map(|l| l.2).fold(0.0, f64::max);

        let mut scale = f64::INFINITY;
        if bounds.width() > 0.0 {
            scale = scale.min(avail_w / bounds.width());
        }
        if bounds.height() > 0.0 {
            scale = scale.min((avail_h - text_h) / bounds.height());
        }
        for &(x, w, _) in &labels {
            let dx = x - bounds.min_x;
            if dx > 0.0 {
                scale = scale.min((avail_w - w) / dx);
            }
        }
        if !scale.is_finite() || scale <= 0.0 {
            scale = 1.0;
        }

        let content_w = labels.iter()
            .map(|&(x, w, _)| (x - bounds.min_x) * scale + w)
            .fold(bounds.width() * scale, f64::max);
        let content_h = bounds.height() * scale + text_h;

        Viewport {
            scale,
            left: (width as f64 - content_w) / 2.0,
            top: (height as f64 - content_h) / 2.0 + text_h,
            min_x: bounds.min_x,
            max_y: bounds.max_y,
        }
    }

    /// Pixels per diagram unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Diagram-unit ranges covered by a `width × height` image, y growing
    /// upward. Plotting in these ranges agrees with [Viewport::to_px].
    pub fn plot_ranges(&self, width: u32, height: u32) -> (Range<f64>, Range<f64>) {
        let x0 = self.min_x - self.left / self.scale;
        let y1 = self.max_y + self.top / self.scale;
        (x0..x0 + width as f64 / self.scale, y1 - height as f64 / self.scale..y1)
    }

    pub fn to_px(&self, p: Point) -> (f64, f64) {
        (
            self.left + (p.x - self.min_x) * self.scale,
            self.top + (self.max_y - p.y) * self.scale,
        )
    }
}

type PlotArea<'a> = DrawingArea<BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn stroke_px(points: f64) -> u32 {
    points_to_px(points).round().max(1.0) as u32
}

/// One finished render: the raster plus the mapping used to produce it.
pub struct Canvas {
    image: RgbaImage,
    viewport: Viewport,
}

impl Canvas {
    /// Fits and paints a whole scene onto a white `width × height` image.
    /// Circles go down first, then lines, then text on top.
    pub fn render(scene: &Scene, width: u32, height: u32) -> Result<Canvas, RenderError> {
        let viewport = Viewport::fit(scene, width, height);
        let mut rgb = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            let (xs, ys) = viewport.plot_ranges(width, height);
            let area: PlotArea = root.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
                xs,
                ys,
                (0..width as i32, 0..height as i32),
            ));
            for shape in scene.circles().chain(scene.lines()) {
                plot(&area, &viewport, shape)?;
            }
            root.present()?;
        }

        let mut image = RgbaImage::new(width, height);
        for (dst, src) in image.pixels_mut().zip(rgb.chunks_exact(3)) {
            *dst = Rgba([src[0], src[1], src[2], 255]);
        }

        let mut canvas = Canvas { image, viewport };
        for shape in scene.texts() {
            if let Shape::Text { anchor, text, size } = shape {
                canvas.text(*anchor, text, *size, Color::BLACK);
            }
        }
        Ok(canvas)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        color.blend_onto(self.image.get_pixel_mut(x as u32, y as u32));
    }

    /// Bitmap text with its baseline on `anchor`.
    pub fn text(&mut self, anchor: Point, text: &str, size: f64, color: Color) {
        let scale = font::scale_for(size) as i64;
        let (ax, ay) = self.viewport.to_px(anchor);
        let left = ax.round() as i64;
        let top = ay.round() as i64 - font::GLYPH_HEIGHT as i64 * scale;

        for (i, c) in text.chars().enumerate() {
            let origin_x = left + i as i64 * font::ADVANCE as i64 * scale;
            for (row, &bits) in font::glyph(c).iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    let mask = 1u8 << (font::GLYPH_WIDTH - 1 - col);
                    if bits & mask == 0 {
                        continue;
                    }
                    let px = origin_x + col as i64 * scale;
                    let py = top + row as i64 * scale;
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.blend(px + sx, py + sy, color);
                        }
                    }
                }
            }
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ColorType::Rgba8,
        )?;
        Ok(out)
    }
}

/// Draws a circle or line in diagram units. Text is left to [Canvas::text].
fn plot(area: &PlotArea, viewport: &Viewport, shape: &Shape) -> Result<(), RenderError> {
    match shape {
        Shape::Circle { center, radius, fill, edge, edge_width } => {
            let at = (center.x, center.y);
            let r = (radius * viewport.scale()).round() as i32;
            area.draw(&Circle::new(at, r, ShapeStyle { color: (*fill).into(), filled: true, stroke_width: 1 }))?;
            area.draw(&Circle::new(
                at,
                r,
                ShapeStyle { color: (*edge).into(), filled: false, stroke_width: stroke_px(*edge_width) },
            ))?;
        }
        Shape::Line { from, to, color, width } => {
            area.draw(&PathElement::new(
                vec![(from.x, from.y), (to.x, to.y)],
                ShapeStyle { color: (*color).into(), filled: false, stroke_width: stroke_px(*width) },
            ))?;
        }
        Shape::Text { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_dot() -> Scene {
        let mut scene = Scene::new();
        scene.add_circle(Point::new(0.0, 0.0), 1.0, Color::rgba(0.0, 0.0, 1.0, 1.0), Color::BLACK, 1.5);
        scene.add_circle(Point::new(10.0, 0.0), 1.0, Color::WHITE, Color::BLACK, 1.5);
        scene
    }

    #[test]
    fn viewport_keeps_content_inside_image() {
        let scene = single_dot();
        let vp = Viewport::fit(&scene, 200, 100);
        let (lx, _) = vp.to_px(Point::new(-1.0, 0.0));
        let (rx, _) = vp.to_px(Point::new(11.0, 0.0));
        assert!(lx >= 0.0 && rx <= 200.0);
        assert!((rx - lx - 12.0 * vp.scale()).abs() < 1e-9);
    }

    #[test]
    fn circle_centre_gets_fill_colour() {
        let scene = single_dot();
        let canvas = Canvas::render(&scene, 200, 100).unwrap();
        let (cx, cy) = canvas.viewport().to_px(Point::new(0.0, 0.0));
        let px = canvas.image().get_pixel(cx as u32, cy as u32);
        assert_eq!(px.0, [0, 0, 255, 255]);
    }

    #[test]
    fn y_axis_points_up() {
        let mut scene = Scene::new();
        scene.add_line(Point::new(0.0, 0.0), Point::new(0.0, 10.0), Color::BLACK, 1.0);
        let vp = Viewport::fit(&scene, 100, 100);
        let (_, bottom) = vp.to_px(Point::new(0.0, 0.0));
        let (_, top) = vp.to_px(Point::new(0.0, 10.0));
        assert!(top < bottom);
    }

    #[test]
    fn plot_ranges_invert_to_px() {
        let vp = Viewport::fit(&single_dot(), 200, 100);
        let (xs, ys) = vp.plot_ranges(200, 100);
        let (left, top) = vp.to_px(Point::new(xs.start, ys.end));
        let (right, bottom) = vp.to_px(Point::new(xs.end, ys.start));
        assert!(left.abs() < 1e-9 && top.abs() < 1e-9);
        assert!((right - 200.0).abs() < 1e-9 && (bottom - 100.0).abs() < 1e-9);
    }

    #[test]
    fn faint_line_tints_without_covering() {
        let mut scene = Scene::new();
        scene.add_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Color::rgba(0.0, 0.0, 1.0, 0.1), 1.0);
        scene.add_line(Point::new(0.0, 5.0), Point::new(10.0, 5.0), Color::BLACK, 1.0);
        let canvas = Canvas::render(&scene, 120, 80).unwrap();
        let (x, y) = canvas.viewport().to_px(Point::new(5.0, 0.0));
        let px = (y.round() as i64 - 1..=y.round() as i64 + 1)
            .map(|row| canvas.image().get_pixel(x as u32, row as u32).0)
            .find(|p| *p != [255, 255, 255, 255])
            .unwrap();
        assert!(px[2] == 255 && px[0] > 200 && px[0] < 255);
    }

    #[test]
    fn png_has_signature() {
        let png = Canvas::render(&single_dot(), 64, 32).unwrap().encode_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 32));
    }
}
