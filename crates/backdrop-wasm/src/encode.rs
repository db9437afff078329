//! Image encoding WASM bindings.
//!
//! This module exposes the backdrop-core PNG encoding to JavaScript, enabling
//! the download/export workflow to turn a composed scene into a file.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@backdrop/wasm';
//!
//! const pngBytes = encode_png(composedImage);
//! const blob = new Blob([pngBytes], { type: 'image/png' });
//! ```

use crate::types::JsRasterImage;
use backdrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an RGBA image to PNG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded bytes, or an error if encoding
/// fails.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}
