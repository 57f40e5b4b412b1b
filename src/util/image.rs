//! Image preprocessing for feeding a picture of a digit to a model.

use image::ImageError;

use crate::math::matrix::Matrix;

/// Decodes image bytes (PNG), resizes to `side × side`, converts to
/// grayscale and normalizes pixels to [0, 1].
///
/// Models trained on MNIST expect a light digit on a dark background; set
/// `invert` for dark ink on a light page.
pub fn image_bytes_to_grayscale_input(bytes: &[u8], side: u32, invert: bool) -> Result<Matrix, ImageError> {
    let img = image::load_from_memory(bytes)?;
    let resized = img.resize_exact(side, side, image::imageops::FilterType::Lanczos3);
    let gray = resized.to_luma8();
    let data = gray.pixels()
        .map(|p| p.0[0] as f64 / 255.0)
        .map(|v| if invert { 1.0 - v } else { v })
        .collect();
    Ok(Matrix { rows: side as usize, cols: side as usize, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Luma, GrayImage};
    use std::io::Cursor;

    fn white_png(side: u32) -> Vec<u8> {
        let img = GrayImage::from_pixel(side, side, Luma([255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageOutputFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn resizes_and_normalizes() {
        let input = image_bytes_to_grayscale_input(&white_png(56), 28, false).unwrap();
        assert_eq!((input.rows, input.cols), (28, 28));
        assert!(input.data.iter().all(|&v| (v - 1.0).abs() < 1e-9));
    }

    #[test]
    fn invert_flips_intensity() {
        let input = image_bytes_to_grayscale_input(&white_png(28), 28, true).unwrap();
        assert!(input.data.iter().all(|&v| v.abs() < 1e-9));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(image_bytes_to_grayscale_input(b"not an image", 28, false).is_err());
    }
}
