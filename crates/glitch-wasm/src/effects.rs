//! WASM bindings for the glitch effects.
//!
//! Each binding takes a source raster and returns a new one; the source is
//! left untouched. Effects that use randomness take a `seed` so the same call
//! always produces the same picture.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const bent = horizontal_wave(source, 35);
//! const chopped = vertical_chop(bent, 42n);
//! const result = apply_effect(chopped, { type: "shear", angle: 0.3 }, 0n);
//! ```

use glitch_core::decode::FilterType;
use glitch_core::{Effect, EffectError, ImageEffectEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::types::{check_buffer, to_js_error, JsRaster};

/// Run `f` on an engine built from `image` and hand back the result.
fn with_engine<F>(image: &JsRaster, f: F) -> Result<JsRaster, JsValue>
where
    F: FnOnce(&mut ImageEffectEngine) -> Result<(), EffectError>,
{
    check_buffer(image).map_err(to_js_error)?;
    let mut engine = ImageEffectEngine::new(image.to_decoded()).map_err(to_js_error)?;
    f(&mut engine).map_err(to_js_error)?;
    Ok(JsRaster::from_decoded(engine.into_inner()))
}

/// Convert a u8 filter value: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
///
/// Any other value falls back to Nearest, the wave default.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        1 => FilterType::Bilinear,
        2 => FilterType::Lanczos3,
        _ => FilterType::Nearest,
    }
}

/// Shuffle equal-width vertical strips.
#[wasm_bindgen]
pub fn vertical_chop(image: &JsRaster, seed: u64) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| e.vertical_chop(&mut StdRng::seed_from_u64(seed)))
}

/// Shuffle equal-height horizontal strips.
#[wasm_bindgen]
pub fn horizontal_chop(image: &JsRaster, seed: u64) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| e.horizontal_chop(&mut StdRng::seed_from_u64(seed)))
}

#[wasm_bindgen]
pub fn color_round(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.color_round();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn color_cosine(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.color_cosine();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn color_sine(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.color_sine();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn color_tangent(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.color_tangent();
        Ok(())
    })
}

/// Bend rows. `filter` is optional (see `filter_from_u8`), defaulting to nearest.
#[wasm_bindgen]
pub fn horizontal_wave(
    image: &JsRaster,
    amplitude: i32,
    filter: Option<u8>,
) -> Result<JsRaster, JsValue> {
    let filter = filter_from_u8(filter.unwrap_or(0));
    with_engine(image, |e| {
        e.horizontal_wave_with(amplitude, filter);
        Ok(())
    })
}

/// Bend columns. `filter` is optional (see `filter_from_u8`), defaulting to nearest.
#[wasm_bindgen]
pub fn vertical_wave(
    image: &JsRaster,
    amplitude: i32,
    filter: Option<u8>,
) -> Result<JsRaster, JsValue> {
    let filter = filter_from_u8(filter.unwrap_or(0));
    with_engine(image, |e| {
        e.vertical_wave_with(amplitude, filter);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn y_reverse(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.y_reverse();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn x_reverse(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.x_reverse();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn randomize_color(image: &JsRaster, seed: u64) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.randomize_color(&mut StdRng::seed_from_u64(seed));
        Ok(())
    })
}

/// `angle` is in radians.
#[wasm_bindgen]
pub fn shear(image: &JsRaster, angle: f64) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.shear(angle);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn log_color(image: &JsRaster) -> Result<JsRaster, JsValue> {
    with_engine(image, |e| {
        e.log();
        Ok(())
    })
}

/// `ratio` defaults to 1.0 when omitted.
#[wasm_bindgen]
pub fn roll(image: &JsRaster, ratio: Option<f64>) -> Result<JsRaster, JsValue> {
    let ratio = ratio.unwrap_or(glitch_core::effects::DEFAULT_ROLL_RATIO);
    with_engine(image, |e| {
        e.roll(ratio);
        Ok(())
    })
}

/// Apply an effect described as a plain object, e.g. `{ type: "roll", ratio: 0.5 }`.
#[wasm_bindgen]
pub fn apply_effect(image: &JsRaster, effect: JsValue, seed: u64) -> Result<JsRaster, JsValue> {
    let effect: Effect = serde_wasm_bindgen::from_value(effect)
        .map_err(|e| JsValue::from_str(&format!("Invalid effect: {}", e)))?;
    with_engine(image, |e| {
        e.apply(&effect, &mut StdRng::seed_from_u64(seed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distinct bytes so reorderings are visible.
    fn test_image(width: u32, height: u32) -> JsRaster {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsRaster::new(width, height, pixels)
    }

    fn ok(result: Result<JsRaster, JsValue>) -> JsRaster {
        match result {
            Ok(img) => img,
            Err(_) => panic!("binding returned an error"),
        }
    }

    #[test]
    fn test_filter_from_u8() {
        assert!(matches!(filter_from_u8(0), FilterType::Nearest));
        assert!(matches!(filter_from_u8(1), FilterType::Bilinear));
        assert!(matches!(filter_from_u8(2), FilterType::Lanczos3));
        assert!(matches!(filter_from_u8(200), FilterType::Nearest));
    }

    #[test]
    fn test_color_round_output_is_binary() {
        let result = ok(color_round(&test_image(8, 8)));
        assert!(result.pixels().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_chop_is_seeded() {
        let img = test_image(12, 6);
        let a = ok(vertical_chop(&img, 9));
        let b = ok(vertical_chop(&img, 9));
        assert_eq!(a.pixels(), b.pixels());
        assert_eq!((a.width(), a.height()), (12, 6));

        let c = ok(horizontal_chop(&img, 9));
        assert_eq!(c.byte_length(), img.byte_length());
    }

    #[test]
    fn test_wave_zero_amplitude_is_identity() {
        let img = test_image(10, 10);
        assert_eq!(ok(horizontal_wave(&img, 0, None)).pixels(), img.pixels());
        assert_eq!(ok(vertical_wave(&img, 0, Some(1))).pixels(), img.pixels());
    }

    #[test]
    fn test_wave_keeps_dimensions() {
        let img = test_image(20, 10);
        let out = ok(horizontal_wave(&img, 25, Some(2)));
        assert_eq!((out.width(), out.height()), (20, 10));
    }

    #[test]
    fn test_reverse_twice_restores() {
        let img = test_image(5, 4);
        let once = ok(x_reverse(&img));
        assert_ne!(once.pixels(), img.pixels());
        assert_eq!(ok(x_reverse(&once)).pixels(), img.pixels());
        assert_eq!(ok(y_reverse(&ok(y_reverse(&img)))).pixels(), img.pixels());
    }

    #[test]
    fn test_identity_parameters() {
        let img = test_image(7, 7);
        assert_eq!(ok(shear(&img, 0.0)).pixels(), img.pixels());
        assert_eq!(ok(roll(&img, Some(0.0))).pixels(), img.pixels());
    }

    #[test]
    fn test_randomize_color_keeps_red() {
        let img = test_image(4, 4);
        let out = ok(randomize_color(&img, 1));
        let src = img.pixels();
        for (a, b) in src.chunks_exact(3).zip(out.pixels().chunks_exact(3)) {
            assert_eq!(a[0], b[0]);
            assert!(b[1] >= 1 && b[2] >= 1);
        }
    }

    #[test]
    fn test_trig_and_log_maps() {
        let img = JsRaster::new(1, 1, vec![0, 0, 0]);
        assert_eq!(ok(color_cosine(&img)).pixels(), vec![255, 255, 255]);
        assert_eq!(ok(color_sine(&img)).pixels(), vec![0, 0, 0]);
        assert_eq!(ok(color_tangent(&img)).pixels(), vec![0, 0, 0]);
        assert_eq!(ok(log_color(&img)).pixels(), vec![0, 0, 0]);
    }

    #[test]
    fn test_roll_default_ratio() {
        let img = test_image(6, 5);
        let out = ok(roll(&img, None));
        assert_eq!((out.width(), out.height()), (6, 5));
    }
}
