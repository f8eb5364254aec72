//! Error type for the effect engine.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::raster::Axis;

/// Errors raised by the engine and by effects that can fail.
#[derive(Debug, Error)]
pub enum EffectError {
    /// The raster handed to the engine has a zero dimension.
    #[error("Invalid image: width ({width}) and height ({height}) must be non-zero")]
    InvalidImage { width: u32, height: u32 },

    /// The pixel buffer length doesn't match the declared dimensions.
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidPixelBuffer { expected: usize, actual: usize },

    /// A chop was asked to split an axis of length zero.
    #[error("Cannot chop along a degenerate {axis}: dimension is zero")]
    DegenerateDimension { axis: Axis },

    /// Loading the image failed in the codec.
    #[error("Codec error while decoding: {0}")]
    Decode(#[from] DecodeError),

    /// Saving the image failed in the codec.
    #[error("Codec error while encoding: {0}")]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EffectError::InvalidImage {
            width: 0,
            height: 12,
        };
        assert_eq!(
            err.to_string(),
            "Invalid image: width (0) and height (12) must be non-zero"
        );

        let err = EffectError::InvalidPixelBuffer {
            expected: 12,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Pixel buffer holds 3 bytes, expected 12");

        let err = EffectError::DegenerateDimension {
            axis: Axis::Vertical,
        };
        assert_eq!(
            err.to_string(),
            "Cannot chop along a degenerate height: dimension is zero"
        );
    }

    #[test]
    fn test_codec_errors_convert() {
        let err: EffectError = DecodeError::InvalidFormat.into();
        assert!(matches!(err, EffectError::Decode(_)));
        assert_eq!(
            err.to_string(),
            "Codec error while decoding: Invalid or unsupported image format"
        );

        let err: EffectError = EncodeError::EncodingFailed("boom".into()).into();
        assert!(matches!(err, EffectError::Encode(_)));
    }
}
