//! Pixel access shared by every effect.
//!
//! Effects only need to read and write single RGB pixels, create a blank
//! canvas and resample a canvas back to a given size. [`Raster`] captures
//! exactly that, and is implemented both for the crate's own
//! [`DecodedImage`] and for `image::RgbImage`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::{resize, DecodedImage, FilterType};
use crate::error::EffectError;

/// One RGB pixel, 8 bits per channel.
pub type Rgb = [u8; 3];

/// Background color of freshly created canvases.
pub const BLACK: Rgb = [0, 0, 0];

/// Image axis, used when an operation works along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Along the width (x coordinate).
    Horizontal,
    /// Along the height (y coordinate).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// A width x height grid of RGB pixels.
///
/// Coordinates passed to [`get_pixel`](Raster::get_pixel) and
/// [`put_pixel`](Raster::put_pixel) must satisfy `x < width` and
/// `y < height`; implementations may panic otherwise.
pub trait Raster: Clone {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get_pixel(&self, x: u32, y: u32) -> Rgb;

    fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgb);

    /// Create a canvas of the given size filled with `fill`.
    fn blank(width: u32, height: u32, fill: Rgb) -> Self;

    /// Resample to the given size using `filter`.
    fn resample(&self, width: u32, height: u32, filter: FilterType) -> Self;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// True when either dimension is zero.
    fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check that the pixel storage covers every coordinate.
    ///
    /// Types whose constructors already enforce this keep the default.
    fn check_buffer(&self) -> Result<(), EffectError> {
        Ok(())
    }
}

impl Raster for DecodedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = self.offset(x, y);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgb) {
        let idx = self.offset(x, y);
        self.pixels[idx..idx + 3].copy_from_slice(&pixel);
    }

    fn blank(width: u32, height: u32, fill: Rgb) -> Self {
        DecodedImage::filled(width, height, fill)
    }

    /// Falls back to a black canvas when `resize` rejects the input
    /// (zero target size or a short buffer).
    fn resample(&self, width: u32, height: u32, filter: FilterType) -> Self {
        resize(self, width, height, filter)
            .unwrap_or_else(|_| DecodedImage::filled(width, height, BLACK))
    }

    fn check_buffer(&self) -> Result<(), EffectError> {
        let expected = self.expected_len();
        if self.pixels.len() != expected {
            return Err(EffectError::InvalidPixelBuffer {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

impl Raster for image::RgbImage {
    fn width(&self) -> u32 {
        image::RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        image::RgbImage::height(self)
    }

    #[inline]
    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        image::RgbImage::get_pixel(self, x, y).0
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgb) {
        image::RgbImage::put_pixel(self, x, y, image::Rgb(pixel));
    }

    fn blank(width: u32, height: u32, fill: Rgb) -> Self {
        image::RgbImage::from_pixel(width, height, image::Rgb(fill))
    }

    fn resample(&self, width: u32, height: u32, filter: FilterType) -> Self {
        if (image::RgbImage::width(self), image::RgbImage::height(self)) == (width, height) {
            return self.clone();
        }
        image::imageops::resize(self, width, height, filter.to_image_filter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip_pixels<R: Raster>(mut raster: R) {
        raster.put_pixel(1, 0, [1, 2, 3]);
        raster.put_pixel(0, 1, [4, 5, 6]);
        assert_eq!(raster.get_pixel(1, 0), [1, 2, 3]);
        assert_eq!(raster.get_pixel(0, 1), [4, 5, 6]);
        assert_eq!(raster.get_pixel(1, 1), [9, 9, 9]);
    }

    #[test]
    fn test_decoded_image_pixel_access() {
        roundtrip_pixels(DecodedImage::blank(2, 2, [9, 9, 9]));
    }

    #[test]
    fn test_rgb_image_pixel_access() {
        roundtrip_pixels(image::RgbImage::blank(2, 2, [9, 9, 9]));
    }

    #[test]
    fn test_decoded_image_layout_is_row_major() {
        let mut img = DecodedImage::blank(3, 2, BLACK);
        img.put_pixel(2, 1, [7, 8, 9]);
        assert_eq!(&img.pixels[15..18], &[7, 8, 9]);
    }

    #[test]
    fn test_resample_same_size_is_identity() {
        let img = DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(img.resample(2, 1, FilterType::Lanczos3), img);
    }

    #[test]
    fn test_resample_changes_dimensions() {
        let img = DecodedImage::blank(10, 6, [50, 60, 70]);
        let out = img.resample(5, 3, FilterType::Bilinear);
        assert_eq!(out.dimensions(), (5, 3));
        // A flat image stays flat under any filter
        assert_eq!(out.get_pixel(2, 1), [50, 60, 70]);
    }

    #[test]
    fn test_resample_matches_decode_resize() {
        let pixels = (0..8 * 6 * 3).map(|i| (i * 13 % 256) as u8).collect();
        let img = DecodedImage::new(8, 6, pixels);
        let expected = resize(&img, 3, 4, FilterType::Nearest).unwrap();
        assert_eq!(img.resample(3, 4, FilterType::Nearest), expected);
    }

    #[test]
    fn test_resample_short_buffer_gives_black_canvas() {
        let img = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![9; 5],
        };
        assert_eq!(img.resample(2, 2, FilterType::Nearest), DecodedImage::blank(2, 2, BLACK));
    }

    #[test]
    fn test_check_buffer() {
        assert!(DecodedImage::blank(3, 2, BLACK).check_buffer().is_ok());
        assert!(image::RgbImage::blank(3, 2, BLACK).check_buffer().is_ok());

        let short = DecodedImage {
            width: 2,
            height: 2,
            pixels: vec![0; 3],
        };
        assert!(matches!(
            short.check_buffer(),
            Err(EffectError::InvalidPixelBuffer {
                expected: 12,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Horizontal.to_string(), "width");
        assert_eq!(Axis::Vertical.to_string(), "height");
    }

    #[test]
    fn test_is_degenerate() {
        assert!(DecodedImage::blank(0, 4, BLACK).is_degenerate());
        assert!(!DecodedImage::blank(1, 1, BLACK).is_degenerate());
    }
}
