//! Rotational remap with wraparound.

use crate::raster::{Raster, BLACK};

/// Move each pixel `(x, y)` to
/// `(trunc(x cos a - y sin a) mod W, trunc(x sin a + y cos a) mod H)`.
///
/// The modulo is Euclidean, so negative coordinates wrap to the far edge.
/// The mapping is not a bijection: when several sources land on the same
/// destination the last one in scan order (y outer, x inner) wins, and
/// destinations nothing lands on stay black.
pub fn shear<R: Raster>(raster: &R, angle: f64) -> R {
    let (width, height) = raster.dimensions();
    let mut out = R::blank(width, height, BLACK);
    if raster.is_degenerate() {
        return out;
    }

    let (sin, cos) = angle.sin_cos();
    let (w, h) = (width as i64, height as i64);

    for y in 0..height {
        for x in 0..width {
            let (fx, fy) = (x as f64, y as f64);
            let tx = ((fx * cos - fy * sin) as i64).rem_euclid(w);
            let ty = ((fx * sin + fy * cos) as i64).rem_euclid(h);
            out.put_pixel(tx as u32, ty as u32, raster.get_pixel(x, y));
        }
    }

    out
}
