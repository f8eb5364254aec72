//! Glitch WASM - WebAssembly bindings for the glitch effect engine
//!
//! This crate exposes `glitch-core` to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - The `JsRaster` wrapper for RGB pixel data
//! - `decode` - Image decoding (JPEG, PNG)
//! - `encode` - Image encoding (JPEG, PNG)
//! - `effects` - One binding per glitch effect, plus `apply_effect`
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, vertical_chop, color_round, encode_png } from '@glitchkit/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! let image = decode_image(bytes);
//! image = vertical_chop(image, 1234n);
//! image = color_round(image);
//! const png = encode_png(image);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod effects;
mod encode;
mod types;

pub use decode::decode_image;
pub use effects::{
    apply_effect, color_cosine, color_round, color_sine, color_tangent, horizontal_chop,
    horizontal_wave, log_color, randomize_color, roll, shear, vertical_chop, vertical_wave,
    x_reverse, y_reverse,
};
pub use encode::{encode_jpeg, encode_png};
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
