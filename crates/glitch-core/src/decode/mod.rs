//! Image decoding for the glitch engine.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG images into RGB rasters
//! - Applying the EXIF orientation stored alongside the pixels
//! - Resampling rasters (used by the wave effects)
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use glitch_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, decode_image_no_orientation, get_orientation};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
