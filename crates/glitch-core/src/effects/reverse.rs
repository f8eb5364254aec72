//! Interleaved axis reversal.
//!
//! ```text
//! x_reverse           y_reverse
//! a b c d   a b c d   a b c d   a n c p
//! e f g h → h g f e   e f g h → e j g l
//! i j k l   i j k l   i j k l   i f k h
//! m n o p   p o n m   m n o p   m b o d
//! ```

use crate::raster::{Raster, BLACK};

/// Reverse every odd row left to right; even rows are copied unchanged.
pub fn x_reverse<R: Raster>(raster: &R) -> R {
    let (width, height) = raster.dimensions();
    let mut out = R::blank(width, height, BLACK);
    for y in 0..height {
        for x in 0..width {
            let src_x = if y % 2 == 1 { width - 1 - x } else { x };
            out.put_pixel(x, y, raster.get_pixel(src_x, y));
        }
    }
    out
}

/// Reverse every odd column top to bottom; even columns are copied unchanged.
pub fn y_reverse<R: Raster>(raster: &R) -> R {
    let (width, height) = raster.dimensions();
    let mut out = R::blank(width, height, BLACK);
    for y in 0..height {
        for x in 0..width {
            let src_y = if x % 2 == 1 { height - 1 - y } else { y };
            out.put_pixel(x, y, raster.get_pixel(x, src_y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodedImage;

    /// 4x4 image with a distinct value per pixel (letters a..p in the diagram).
    fn letters() -> DecodedImage {
        let pixels = (0..16u8).flat_map(|i| [i, i, i]).collect();
        DecodedImage::new(4, 4, pixels)
    }

    fn values(img: &DecodedImage) -> Vec<u8> {
        img.pixels.chunks_exact(3).map(|px| px[0]).collect()
    }

    #[test]
    fn test_x_reverse_layout() {
        let out = x_reverse(&letters());
        assert_eq!(
            values(&out),
            vec![0, 1, 2, 3, 7, 6, 5, 4, 8, 9, 10, 11, 15, 14, 13, 12]
        );
    }

    #[test]
    fn test_y_reverse_layout() {
        let out = y_reverse(&letters());
        assert_eq!(
            values(&out),
            vec![0, 13, 2, 15, 4, 9, 6, 11, 8, 5, 10, 7, 12, 1, 14, 3]
        );
    }

    #[test]
    fn test_x_reverse_twice_is_identity() {
        let img = letters();
        assert_eq!(x_reverse(&x_reverse(&img)), img);
    }

    #[test]
    fn test_y_reverse_twice_is_identity() {
        let img = letters();
        assert_eq!(y_reverse(&y_reverse(&img)), img);
    }

    #[test]
    fn test_single_row_and_column() {
        // Only row 0 / column 0 exists, which is even, so nothing moves
        let row = DecodedImage::new(3, 1, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
        assert_eq!(x_reverse(&row), row);

        let col = DecodedImage::new(1, 3, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
        assert_eq!(y_reverse(&col), col);
    }

    #[test]
    fn test_empty_raster() {
        let img = DecodedImage::blank(0, 0, BLACK);
        assert_eq!(x_reverse(&img), img);
        assert_eq!(y_reverse(&img), img);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::DecodedImage;
    use proptest::prelude::*;

    proptest! {
        /// Property: both reversals are involutions on any raster.
        #[test]
        fn prop_reversals_are_involutions(
            (width, height) in (1u32..=30, 1u32..=30),
            salt in any::<u8>(),
        ) {
            let pixels = (0..width * height * 3).map(|i| (i as u8) ^ salt).collect();
            let img = DecodedImage::new(width, height, pixels);

            prop_assert_eq!(&x_reverse(&x_reverse(&img)), &img);
            prop_assert_eq!(&y_reverse(&y_reverse(&img)), &img);
        }
    }
}
