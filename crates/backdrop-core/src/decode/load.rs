//! Decoding encoded image bytes into RGBA rasters.
//!
//! The Studio UI hands the pipeline three already-encoded images: the
//! viewport capture, its silhouette mask, and the background-removed cutout
//! from the generation API. All arrive as PNG (the cutout needs its alpha
//! channel) or JPEG (opaque captures), and all are normalized to RGBA here.

use std::io::Cursor;

use image::ImageReader;

use super::DecodeError;
use crate::raster::RasterImage;

/// Decode PNG or JPEG bytes into an RGBA [`RasterImage`].
///
/// The format is sniffed from the bytes, not trusted from any file name.
/// Images without an alpha channel decode as fully opaque.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format, `DecodeError::CorruptedFile` if decoding fails partway, and
/// `DecodeError::InvalidDimensions` for a degenerate zero-sized image.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    Ok(RasterImage::from_rgba_image(rgba))
}
