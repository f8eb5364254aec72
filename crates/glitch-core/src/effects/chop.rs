//! Split-and-shuffle along one axis.
//!
//! The axis is cut into `d` strips of equal length, where `d` is a random
//! factor of the axis length, and the strips are reassembled in a random
//! order. Since `d` always divides the length, the strips tile the axis
//! exactly and no pixel is lost or duplicated.
//!
//! ```text
//! d = 4, order = [2, 0, 3, 1]
//! ┌──┬──┬──┬──┐   ┌──┬──┬──┬──┐
//! │a │b │c │d │ → │c │a │d │b │
//! └──┴──┴──┴──┘   └──┴──┴──┴──┘
//! ```

use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::error::EffectError;
use crate::raster::{Axis, Raster, BLACK};

/// All positive integers dividing `n`, in ascending order.
///
/// Always contains `1` and `n` when `n > 0`; empty for `n == 0`.
pub fn factors(n: u32) -> Vec<u32> {
    let mut low = Vec::new();
    let mut high = Vec::new();

    let mut i = 1u32;
    while (i as u64) * (i as u64) <= n as u64 {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }

    low.extend(high.into_iter().rev());
    low
}

/// Chop the image into vertical strips (along the width) and shuffle them.
pub fn vertical_chop<R, G>(raster: &R, rng: &mut G) -> Result<R, EffectError>
where
    R: Raster,
    G: Rng + ?Sized,
{
    chop(raster, Axis::Horizontal, rng)
}

/// Chop the image into horizontal strips (along the height) and shuffle them.
pub fn horizontal_chop<R, G>(raster: &R, rng: &mut G) -> Result<R, EffectError>
where
    R: Raster,
    G: Rng + ?Sized,
{
    chop(raster, Axis::Vertical, rng)
}

fn chop<R, G>(raster: &R, axis: Axis, rng: &mut G) -> Result<R, EffectError>
where
    R: Raster,
    G: Rng + ?Sized,
{
    let (width, height) = raster.dimensions();
    let length = match axis {
        Axis::Horizontal => width,
        Axis::Vertical => height,
    };
    if length == 0 {
        return Err(EffectError::DegenerateDimension { axis });
    }

    let strips = factors(length).choose(rng).copied().unwrap_or(1);
    let strip_len = length / strips;

    let mut order: Vec<u32> = (0..strips).collect();
    order.shuffle(rng);
    debug!("chop along {axis}: {strips} strips of {strip_len}px");

    Ok(reassemble(raster, axis, strip_len, &order))
}

/// Build the output where slot `i` holds source strip `order[i]`.
fn reassemble<R: Raster>(raster: &R, axis: Axis, strip_len: u32, order: &[u32]) -> R {
    let (width, height) = raster.dimensions();
    let mut out = R::blank(width, height, BLACK);

    let source_of = |pos: u32| order[(pos / strip_len) as usize] * strip_len + pos % strip_len;

    for y in 0..height {
        for x in 0..width {
            let pixel = match axis {
                Axis::Horizontal => raster.get_pixel(source_of(x), y),
                Axis::Vertical => raster.get_pixel(x, source_of(y)),
            };
            out.put_pixel(x, y, pixel);
        }
    }

    out
}
