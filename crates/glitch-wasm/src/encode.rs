//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg, encode_png } from '@glitchkit/wasm';
//!
//! const jpeg = encode_jpeg(result, 90);
//! const png = encode_png(result);
//! await writable.write(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::{check_buffer, to_js_error, JsRaster};
use glitch_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a raster to JPEG bytes.
///
/// `quality` is clamped to 1-100; 90 is a good default.
///
/// # Errors
///
/// Returns an error if the pixel buffer doesn't match the dimensions, either
/// dimension is zero, or the encoder fails.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRaster, quality: u8) -> Result<Vec<u8>, JsValue> {
    check_buffer(image).map_err(to_js_error)?;
    let decoded = image.to_decoded();
    encode::encode_jpeg(&decoded.pixels, decoded.width, decoded.height, quality)
        .map_err(to_js_error)
}

/// Encode a raster to lossless PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsRaster) -> Result<Vec<u8>, JsValue> {
    check_buffer(image).map_err(to_js_error)?;
    let decoded = image.to_decoded();
    encode::encode_png(&decoded.pixels, decoded.width, decoded.height).map_err(to_js_error)
}
