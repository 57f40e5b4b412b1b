use image::Rgba;
use plotters::style::RGBAColor;

/// Straight-alpha RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Source-over blend onto an opaque pixel. Alpha is clamped to [0, 1]
    /// here only; callers keep the raw value.
    pub fn blend_onto(&self, dst: &mut Rgba<u8>) {
        let alpha = self.a.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let inv = 1.0 - alpha;
        let mix = |src: f64, d: u8| -> u8 {
            (src.clamp(0.0, 1.0) * 255.0 * alpha + d as f64 * inv).round() as u8
        };
        dst.0 = [mix(self.r, dst.0[0]), mix(self.g, dst.0[1]), mix(self.b, dst.0[2]), 255];
    }
}

impl From<Color> for RGBAColor {
    fn from(c: Color) -> RGBAColor {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBAColor(channel(c.r), channel(c.g), channel(c.b), c.a.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_blend_replaces_pixel() {
        let mut px = Rgba([255, 255, 255, 255]);
        Color::rgba(0.0, 0.0, 1.0, 1.0).blend_onto(&mut px);
        assert_eq!(px.0, [0, 0, 255, 255]);
    }

    #[test]
    fn transparent_blend_leaves_pixel() {
        let mut px = Rgba([10, 20, 30, 255]);
        Color::rgba(1.0, 0.0, 0.0, 0.0).blend_onto(&mut px);
        assert_eq!(px.0, [10, 20, 30, 255]);
    }

    #[test]
    fn converts_to_plot_color() {
        let RGBAColor(r, g, b, a) = Color::rgba(0.0, 0.0, 1.0, 0.1).into();
        assert_eq!((r, g, b), (0, 0, 255));
        assert!((a - 0.1).abs() < 1e-12);
        let RGBAColor(_, _, _, a) = Color::rgba(1.0, 0.0, 0.0, -2.0).into();
        assert_eq!(a, 0.0);
    }

    #[test]
    fn half_green_over_white() {
        let mut px = Rgba([255, 255, 255, 255]);
        Color::rgba(0.0, 1.0, 0.0, 0.5).blend_onto(&mut px);
        assert_eq!(px.0, [128, 255, 128, 255]);
    }
}
