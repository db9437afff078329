//! PNG encoding for the composed result.
//!
//! The flattened scene keeps its alpha channel (transparent backgrounds are a
//! supported output), so the export format is PNG rather than JPEG.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::raster::RasterImage;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA raster to PNG bytes.
///
/// # Errors
///
/// Returns an error if either dimension is zero, if the pixel buffer length
/// doesn't match `width * height * 4`, or if encoding fails internally.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width, image.height);

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 4;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(&image.pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=32, 1u32..=32)
    }

    proptest! {
        /// Property: any well-formed raster encodes to a valid PNG stream.
        #[test]
        fn prop_encode_always_produces_png_signature(
            (width, height) in dimensions_strategy(),
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| (i as u8).wrapping_add(seed))
                .collect();
            let img = RasterImage::new(width, height, pixels);

            let png = encode_png(&img).unwrap();
            prop_assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
        }

        /// Property: encode/decode round-trips the exact pixel buffer.
        #[test]
        fn prop_roundtrip_lossless(
            (width, height) in dimensions_strategy(),
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
                .collect();
            let img = RasterImage::new(width, height, pixels);

            let png = encode_png(&img).unwrap();
            let decoded = crate::decode::decode_image(&png).unwrap();
            prop_assert_eq!(decoded, img);
        }
    }
}
