//! Content-bounds WASM bindings.
//!
//! The Studio UI uses bounds analysis directly for its debug overlay (drawing
//! the detected box over the viewport capture) in addition to the pipeline's
//! internal use.

use crate::types::JsRasterImage;
use backdrop_core::analyze_bounds;
use wasm_bindgen::prelude::*;

/// Analyze an image's visible content and return its bounds.
///
/// A pixel counts as content when its alpha exceeds the visibility threshold
/// (20 of 255), which ignores the anti-aliasing fringe around cutout edges.
///
/// # Returns
///
/// A plain object with `min_x`, `min_y`, `max_x`, `max_y`, `width`, `height`,
/// `center_x`, `center_y`, and `valid` fields. When `valid` is false the
/// image had no visible content and the center falls back to the canvas
/// center.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bounds = analyze_bounds(maskImage);
/// if (bounds.valid) {
///   overlay.drawBox(bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y);
/// }
/// ```
#[wasm_bindgen]
pub fn analyze_image_bounds(image: &JsRasterImage) -> Result<JsValue, JsValue> {
    let bounds = analyze_bounds(&image.to_raster());
    serde_wasm_bindgen::to_value(&bounds).map_err(|e| JsValue::from_str(&e.to_string()))
}
