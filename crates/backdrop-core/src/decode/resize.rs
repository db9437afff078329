//! Image resizing for bounded working sizes.
//!
//! Viewport captures can come in at full screen resolution; resizing them to
//! a bounded working size before the per-pixel pipeline keeps composition
//! latency predictable. All functions return new `RasterImage` instances
//! without modifying the input.

use super::{DecodeError, FilterType};
use crate::raster::RasterImage;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target dimension is
/// zero, and `DecodeError::CorruptedFile` if the source buffer cannot be
/// converted.
pub fn resize(
    image: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(RasterImage::from_rgba_image(resized))
}

/// Resize an image to fit within a maximum edge length while preserving
/// aspect ratio.
///
/// If the image already fits within `max_edge`, it is returned unchanged.
pub fn resize_to_fit(
    image: &RasterImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<RasterImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: max_edge,
            height: max_edge,
        });
    }

    let (src_width, src_height) = (image.width, image.height);

    // If already fits, just clone
    if src_width <= max_edge && src_height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(src_width, src_height, max_edge);

    resize(image, new_width, new_height, filter)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_width = max_edge;
        let new_height = (max_edge as f64 / ratio).round().max(1.0) as u32;
        (new_width, new_height)
    } else {
        // Portrait: constrain by height
        let new_height = max_edge;
        let new_width = (max_edge as f64 * ratio).round().max(1.0) as u32;
        (new_width, new_height)
    }
}
