//! The effect engine: one owned raster, replaced by each effect.
//!
//! Every method computes the complete output raster first and only then
//! swaps it in, so a failed call leaves the previous raster in place.
//!
//! ```ignore
//! use glitch_core::{ImageEffectEngine, OutputFormat};
//!
//! let mut engine = ImageEffectEngine::from_bytes(&std::fs::read("in.jpg")?)?;
//! let mut rng = rand::rng();
//! engine.vertical_chop(&mut rng)?;
//! engine.horizontal_wave(35);
//! engine.y_reverse();
//! engine.color_round();
//! std::fs::write("out.jpg", engine.encode(OutputFormat::default())?)?;
//! ```

use log::{debug, trace};
use rand::Rng;

use crate::decode::{decode_image, DecodedImage, FilterType};
use crate::effects::{self, Effect};
use crate::encode::{encode_image, OutputFormat};
use crate::error::EffectError;
use crate::raster::Raster;

/// Owns a raster and applies glitch effects to it.
///
/// The engine is not synchronized; share it across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct ImageEffectEngine<R: Raster = DecodedImage> {
    raster: R,
}

impl<R: Raster> ImageEffectEngine<R> {
    /// Wrap an existing raster.
    ///
    /// # Errors
    ///
    /// Returns `EffectError::InvalidImage` when either dimension is zero and
    /// `EffectError::InvalidPixelBuffer` when the pixel storage doesn't match
    /// the dimensions.
    pub fn new(raster: R) -> Result<Self, EffectError> {
        let (width, height) = raster.dimensions();
        if width == 0 || height == 0 {
            return Err(EffectError::InvalidImage { width, height });
        }
        raster.check_buffer()?;
        trace!("engine created for {width}x{height} raster");
        Ok(Self { raster })
    }

    /// The current raster.
    pub fn raster(&self) -> &R {
        &self.raster
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }

    /// Consume the engine and return the current raster.
    pub fn into_inner(self) -> R {
        self.raster
    }

    fn replace(&mut self, effect: &Effect, raster: R) {
        debug!("{effect:?}");
        trace!(
            "{}: {:?} -> {:?}",
            effect.name(),
            self.raster.dimensions(),
            raster.dimensions()
        );
        self.raster = raster;
    }

    /// Shuffle equal-width vertical strips. See [`effects::chop`].
    pub fn vertical_chop<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), EffectError> {
        let out = effects::vertical_chop(&self.raster, rng)?;
        self.replace(&Effect::VerticalChop, out);
        Ok(())
    }

    /// Shuffle equal-height horizontal strips. See [`effects::chop`].
    pub fn horizontal_chop<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), EffectError> {
        let out = effects::horizontal_chop(&self.raster, rng)?;
        self.replace(&Effect::HorizontalChop, out);
        Ok(())
    }

    pub fn color_round(&mut self) {
        let out = effects::color_round(&self.raster);
        self.replace(&Effect::ColorRound, out);
    }

    pub fn color_cosine(&mut self) {
        let out = effects::color_cosine(&self.raster);
        self.replace(&Effect::ColorCosine, out);
    }

    pub fn color_sine(&mut self) {
        let out = effects::color_sine(&self.raster);
        self.replace(&Effect::ColorSine, out);
    }

    pub fn color_tangent(&mut self) {
        let out = effects::color_tangent(&self.raster);
        self.replace(&Effect::ColorTangent, out);
    }

    /// Bend rows with nearest-neighbour resampling. Use
    /// [`horizontal_wave_with`](Self::horizontal_wave_with) to pick the filter.
    pub fn horizontal_wave(&mut self, amplitude: i32) {
        self.horizontal_wave_with(amplitude, FilterType::Nearest);
    }

    pub fn horizontal_wave_with(&mut self, amplitude: i32, filter: FilterType) {
        let out = effects::horizontal_wave(&self.raster, amplitude, filter);
        self.replace(&Effect::HorizontalWave { amplitude, filter }, out);
    }

    /// Bend columns with nearest-neighbour resampling.
    pub fn vertical_wave(&mut self, amplitude: i32) {
        self.vertical_wave_with(amplitude, FilterType::Nearest);
    }

    pub fn vertical_wave_with(&mut self, amplitude: i32, filter: FilterType) {
        let out = effects::vertical_wave(&self.raster, amplitude, filter);
        self.replace(&Effect::VerticalWave { amplitude, filter }, out);
    }

    pub fn y_reverse(&mut self) {
        let out = effects::y_reverse(&self.raster);
        self.replace(&Effect::YReverse, out);
    }

    pub fn x_reverse(&mut self) {
        let out = effects::x_reverse(&self.raster);
        self.replace(&Effect::XReverse, out);
    }

    /// Keep red, randomize green and blue in `[1, 255]`.
    pub fn randomize_color<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        let out = effects::randomize_color(&self.raster, rng);
        self.replace(&Effect::RandomizeColor, out);
    }

    /// `angle` is in radians.
    pub fn shear(&mut self, angle: f64) {
        let out = effects::shear(&self.raster, angle);
        self.replace(&Effect::Shear { angle }, out);
    }

    pub fn log(&mut self) {
        let out = effects::color_log(&self.raster);
        self.replace(&Effect::Log, out);
    }

    pub fn roll(&mut self, ratio: f64) {
        let out = effects::roll(&self.raster, ratio);
        self.replace(&Effect::Roll { ratio }, out);
    }

    /// Apply an effect described as data.
    pub fn apply<G: Rng + ?Sized>(&mut self, effect: &Effect, rng: &mut G) -> Result<(), EffectError> {
        let out = effects::apply_effect(&self.raster, effect, rng)?;
        self.replace(effect, out);
        Ok(())
    }
}

impl ImageEffectEngine<DecodedImage> {
    /// Decode JPEG or PNG bytes and wrap the result.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EffectError> {
        let image = decode_image(bytes)?;
        Self::new(image)
    }

    /// Encode the current raster.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>, EffectError> {
        Ok(encode_image(&self.raster, format)?)
    }
}
