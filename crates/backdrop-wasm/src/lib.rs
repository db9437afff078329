//! Backdrop WASM - WebAssembly bindings for Backdrop
//!
//! This crate provides WASM bindings to expose the backdrop-core compositing
//! pipeline to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG/JPEG, resize)
//! - `encode` - Image encoding bindings (PNG export)
//! - `bounds` - Content-bounds analysis binding
//! - `compose` - The scene compositing pipeline
//!
//! # Usage
//!
//! ```typescript
//! import init, { compose_scene_from_bytes } from '@backdrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Compose the generated cutout over a gradient, registered to the mask
//! const png = compose_scene_from_bytes(cutoutBytes, maskBytes,
//!   { mode: 'gradient', color1: '#0a1a2f', color2: '#ffffff' }, undefined);
//! ```

use wasm_bindgen::prelude::*;

mod bounds;
mod compose;
mod decode;
mod encode;
mod types;

// Re-export public types
pub use bounds::analyze_image_bounds;
pub use compose::{compose_scene, compose_scene_from_bytes, JsBackgroundSpec, JsShadowParams};
pub use decode::{decode_image, resize_to_fit};
pub use encode::encode_png;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
