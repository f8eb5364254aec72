//! Per-column cyclic shift.

use crate::raster::{Raster, BLACK};

/// Default `ratio` for [`roll`].
pub const DEFAULT_ROLL_RATIO: f64 = 1.0;

/// Cyclically shift each column `i` down by `round(ratio * H * cos(W * i))`
/// pixels (reduced modulo H). Pixels pushed past the bottom reappear at the top.
pub fn roll<R: Raster>(raster: &R, ratio: f64) -> R {
    let (width, height) = raster.dimensions();
    let mut out = R::blank(width, height, BLACK);
    if raster.is_degenerate() {
        return out;
    }

    for x in 0..width {
        let shift = column_shift(x, width, height, ratio);
        for y in 0..height {
            let target = ((y as u64 + shift as u64) % height as u64) as u32;
            out.put_pixel(x, target, raster.get_pixel(x, y));
        }
    }

    out
}

/// Shift for `column`, always in `[0, height)`.
fn column_shift(column: u32, width: u32, height: u32, ratio: f64) -> u32 {
    let phase = (width as f64 * column as f64).cos();
    let raw = (ratio * height as f64 * phase).round() as i64;
    raw.rem_euclid(height as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodedImage;

    fn numbered(width: u32, height: u32) -> DecodedImage {
        let pixels = (0..width * height)
            .flat_map(|i| [i as u8, 0, 0])
            .collect();
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_zero_ratio_is_identity() {
        let img = numbered(8, 6);
        assert_eq!(roll(&img, 0.0), img);
    }

    #[test]
    fn test_column_shift_first_column() {
        // cos(W * 0) = 1, so column 0 moves by ratio * H
        assert_eq!(column_shift(0, 10, 8, 0.5), 4);
        // A full-height shift wraps to zero
        assert_eq!(column_shift(0, 10, 8, 1.0), 0);
        // Negative shifts wrap from the bottom
        assert_eq!(column_shift(0, 10, 8, -0.25), 6);
    }

    #[test]
    fn test_column_shift_large_values_reduced() {
        for column in 0..50 {
            assert!(column_shift(column, 37, 9, 123.4) < 9);
        }
    }

    #[test]
    fn test_roll_moves_whole_column_cyclically() {
        let img = numbered(1, 4);
        // 1 column, ratio 0.25: shift = round(0.25 * 4 * cos(0)) = 1
        let out = roll(&img, 0.25);
        let reds: Vec<u8> = (0..4).map(|y| out.get_pixel(0, y)[0]).collect();
        assert_eq!(reds, vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_roll_keeps_each_column_content() {
        let img = numbered(5, 7);
        let out = roll(&img, DEFAULT_ROLL_RATIO);

        for x in 0..5 {
            let mut before: Vec<u8> = (0..7).map(|y| img.get_pixel(x, y)[0]).collect();
            let mut after: Vec<u8> = (0..7).map(|y| out.get_pixel(x, y)[0]).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_empty_raster() {
        let img = DecodedImage::blank(3, 0, BLACK);
        assert_eq!(roll(&img, 1.0).dimensions(), (3, 0));
    }
}
