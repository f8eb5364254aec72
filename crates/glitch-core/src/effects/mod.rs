//! Glitch effects.
//!
//! Every effect is a free function that reads a [`Raster`] and returns a
//! freshly built one; the source is never modified. Effects that need
//! randomness take the random source as an argument so callers can seed it.
//!
//! | Effect | Module |
//! |---|---|
//! | vertical / horizontal chop | [`chop`] |
//! | round, cosine, sine, tangent, log, randomize | [`color`] |
//! | horizontal / vertical wave | [`wave`] |
//! | x / y reverse | [`reverse`] |
//! | shear | [`shear`] |
//! | roll | [`roll`] |
//!
//! [`Effect`] describes one effect with its parameters as plain data, so it
//! can be read from JSON or passed across the WASM boundary.

pub mod chop;
pub mod color;
pub mod reverse;
pub mod roll;
pub mod shear;
pub mod wave;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::error::EffectError;
use crate::raster::Raster;

pub use chop::{factors, horizontal_chop, vertical_chop};
pub use color::{
    color_cosine, color_log, color_round, color_sine, color_tangent, randomize_color,
};
pub use reverse::{x_reverse, y_reverse};
pub use roll::{roll, DEFAULT_ROLL_RATIO};
pub use shear::shear;
pub use wave::{horizontal_wave, vertical_wave};

/// One effect and its parameters.
///
/// Serialized with a `type` tag, e.g. `{"type": "shear", "angle": 0.3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    VerticalChop,
    HorizontalChop,
    ColorRound,
    ColorCosine,
    ColorSine,
    ColorTangent,
    HorizontalWave {
        amplitude: i32,
        #[serde(default = "default_wave_filter")]
        filter: FilterType,
    },
    VerticalWave {
        amplitude: i32,
        #[serde(default = "default_wave_filter")]
        filter: FilterType,
    },
    YReverse,
    XReverse,
    RandomizeColor,
    /// Angle in radians.
    Shear {
        angle: f64,
    },
    Log,
    Roll {
        #[serde(default = "default_roll_ratio")]
        ratio: f64,
    },
}

impl Effect {
    /// Snake-case name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::VerticalChop => "vertical_chop",
            Effect::HorizontalChop => "horizontal_chop",
            Effect::ColorRound => "color_round",
            Effect::ColorCosine => "color_cosine",
            Effect::ColorSine => "color_sine",
            Effect::ColorTangent => "color_tangent",
            Effect::HorizontalWave { .. } => "horizontal_wave",
            Effect::VerticalWave { .. } => "vertical_wave",
            Effect::YReverse => "y_reverse",
            Effect::XReverse => "x_reverse",
            Effect::RandomizeColor => "randomize_color",
            Effect::Shear { .. } => "shear",
            Effect::Log => "log",
            Effect::Roll { .. } => "roll",
        }
    }

    /// Whether applying this effect draws from the random source.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Effect::VerticalChop | Effect::HorizontalChop | Effect::RandomizeColor
        )
    }
}

/// Wave padding is squeezed back with nearest-neighbour so the bent edges stay hard.
fn default_wave_filter() -> FilterType {
    FilterType::Nearest
}

fn default_roll_ratio() -> f64 {
    DEFAULT_ROLL_RATIO
}

/// Apply a single effect to `raster`, returning the new raster.
pub fn apply_effect<R, G>(raster: &R, effect: &Effect, rng: &mut G) -> Result<R, EffectError>
where
    R: Raster,
    G: Rng + ?Sized,
{
    let out = match *effect {
        Effect::VerticalChop => vertical_chop(raster, rng)?,
        Effect::HorizontalChop => horizontal_chop(raster, rng)?,
        Effect::ColorRound => color_round(raster),
        Effect::ColorCosine => color_cosine(raster),
        Effect::ColorSine => color_sine(raster),
        Effect::ColorTangent => color_tangent(raster),
        Effect::HorizontalWave { amplitude, filter } => horizontal_wave(raster, amplitude, filter),
        Effect::VerticalWave { amplitude, filter } => vertical_wave(raster, amplitude, filter),
        Effect::YReverse => y_reverse(raster),
        Effect::XReverse => x_reverse(raster),
        Effect::RandomizeColor => randomize_color(raster, rng),
        Effect::Shear { angle } => shear(raster, angle),
        Effect::Log => color_log(raster),
        Effect::Roll { ratio } => roll(raster, ratio),
    };
    Ok(out)
}
