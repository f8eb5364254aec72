//! Sinusoidal displacement.
//!
//! A pixel at wave-axis position `p` and displacement-axis position `q` is
//! moved to `q + A + cos(0.035 * p) * A` (truncated) on an enlarged black
//! canvas that is `2A` longer along the displacement axis. The canvas is
//! then resampled back to the source size, which squeezes the band of
//! black padding into the image.
//!
//! - horizontal wave: `p = x`, rows bend up and down
//! - vertical wave: `p = y`, columns bend left and right

use crate::decode::FilterType;
use crate::raster::{Axis, Raster, BLACK};

/// Angular frequency of the wave, in radians per pixel.
pub const WAVE_FREQUENCY: f64 = 0.035;

/// Displace rows vertically following a cosine over x.
///
/// The sign of `amplitude` is ignored.
pub fn horizontal_wave<R: Raster>(raster: &R, amplitude: i32, filter: FilterType) -> R {
    wave(raster, Axis::Horizontal, amplitude.unsigned_abs(), filter)
}

/// Displace columns horizontally following a cosine over y.
///
/// The sign of `amplitude` is ignored.
pub fn vertical_wave<R: Raster>(raster: &R, amplitude: i32, filter: FilterType) -> R {
    wave(raster, Axis::Vertical, amplitude.unsigned_abs(), filter)
}

/// Offset along the displacement axis for wave-axis position `p`, in `[0, 2A]`.
#[inline]
fn displacement(p: u32, amplitude: u32) -> u64 {
    let a = amplitude as f64;
    ((p as f64 * WAVE_FREQUENCY).cos() * a + a) as u64
}

fn wave<R: Raster>(raster: &R, axis: Axis, amplitude: u32, filter: FilterType) -> R {
    let (width, height) = raster.dimensions();
    if raster.is_degenerate() {
        return raster.clone();
    }

    let pad = 2 * amplitude as u64;
    let (canvas_w, canvas_h) = match axis {
        Axis::Horizontal => (width as u64, height as u64 + pad),
        Axis::Vertical => (width as u64 + pad, height as u64),
    };
    let (Ok(canvas_w), Ok(canvas_h)) = (u32::try_from(canvas_w), u32::try_from(canvas_h)) else {
        // canvas side overflows u32
        return raster.clone();
    };

    let mut canvas = R::blank(canvas_w, canvas_h, BLACK);
    for y in 0..height {
        for x in 0..width {
            let (tx, ty) = match axis {
                Axis::Horizontal => (x as u64, y as u64 + displacement(x, amplitude)),
                Axis::Vertical => (x as u64 + displacement(y, amplitude), y as u64),
            };
            if tx < canvas_w as u64 && ty < canvas_h as u64 {
                canvas.put_pixel(tx as u32, ty as u32, raster.get_pixel(x, y));
            }
        }
    }

    canvas.resample(width, height, filter)
}
