//! Glitch Core - pixel-level glitch effects
//!
//! This crate provides the glitch effect engine: strip chopping, wave
//! distortion, channel remapping, axis reversal, shearing and column
//! rolling over RGB rasters, plus the decode/encode glue around them.
//!
//! # Module Structure
//!
//! - `raster` - the pixel access trait every effect is written against
//! - `effects` - the effects as free functions, and the `Effect` description
//! - `engine` - `ImageEffectEngine`, owning one raster and replacing it per effect
//! - `decode` / `encode` - JPEG and PNG codecs via the `image` crate

pub mod decode;
pub mod effects;
pub mod encode;
pub mod engine;
pub mod error;
pub mod raster;

pub use decode::{decode_image, DecodeError, DecodedImage, FilterType};
pub use effects::{apply_effect, Effect};
pub use encode::{encode_image, EncodeError, OutputFormat};
pub use engine::ImageEffectEngine;
pub use error::EffectError;
pub use raster::{Axis, Raster, Rgb, BLACK};
