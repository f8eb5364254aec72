//! Per-channel color remapping.
//!
//! All functions here keep the geometry and only rewrite channel values.
//! Results are computed in `f64` and clamped to `[0, 255]` before they are
//! stored.

use rand::Rng;

use crate::raster::{Raster, Rgb, BLACK};

/// Channel values at or above this become 255, below become 0.
const ROUND_THRESHOLD: u8 = 128;

/// Green scale factor used by [`color_log`].
const LOG_GREEN_SCALE: f64 = 0.6;

/// Blue multiplier used by [`color_log`].
const LOG_BLUE_GAIN: f64 = 10.0;

/// Hard-threshold every channel to 0 or 255.
pub fn color_round<R: Raster>(raster: &R) -> R {
    map_pixels(raster, |px| px.map(|v| if v < ROUND_THRESHOLD { 0 } else { 255 }))
}

/// Replace every channel `v` with `round(cos(v) * 255)`, `v` taken as radians.
pub fn color_cosine<R: Raster>(raster: &R) -> R {
    map_pixels(raster, |px| px.map(|v| trig_channel(v, f64::cos)))
}

/// Replace every channel `v` with `round(sin(v) * 255)`, `v` taken as radians.
pub fn color_sine<R: Raster>(raster: &R) -> R {
    map_pixels(raster, |px| px.map(|v| trig_channel(v, f64::sin)))
}

/// Replace every channel `v` with `round(tan(v) * 255)`, `v` taken as radians.
pub fn color_tangent<R: Raster>(raster: &R) -> R {
    map_pixels(raster, |px| px.map(|v| trig_channel(v, f64::tan)))
}

/// Keep red, scale green to 60% and compress blue to `10 * ln(blue + 1)`.
///
/// Both derived channels are truncated, not rounded.
pub fn color_log<R: Raster>(raster: &R) -> R {
    map_pixels(raster, |[r, g, b]| {
        let green = g as f64 * LOG_GREEN_SCALE;
        let blue = LOG_BLUE_GAIN * (b as f64 + 1.0).ln();
        [r, green as u8, blue as u8]
    })
}

/// Keep red and replace green and blue with uniform values in `[1, 255]`.
pub fn randomize_color<R, G>(raster: &R, rng: &mut G) -> R
where
    R: Raster,
    G: Rng + ?Sized,
{
    map_pixels(raster, |[r, _, _]| {
        [r, rng.random_range(1..=255u8), rng.random_range(1..=255u8)]
    })
}

/// Raw byte taken as an angle in radians. Out-of-range results are clamped,
/// which matters for `tan` near odd multiples of pi/2.
#[inline]
fn trig_channel(value: u8, trig: fn(f64) -> f64) -> u8 {
    (trig(value as f64) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Build a new raster of the same size with `f` applied to each pixel, in scan order.
fn map_pixels<R: Raster>(raster: &R, mut f: impl FnMut(Rgb) -> Rgb) -> R {
    let (width, height) = raster.dimensions();
    let mut out = R::blank(width, height, BLACK);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(x, y, f(raster.get_pixel(x, y)));
        }
    }
    out
}
