//! Scene composition WASM bindings.
//!
//! This module exposes the full compositing pipeline to JavaScript: the
//! Studio UI hands over the background-removed cutout, the silhouette mask,
//! and a background description, and gets back one flattened image.
//!
//! The background and shadow descriptions are passed from TypeScript as
//! plain JSON objects via serde_wasm_bindgen.

use crate::types::JsRasterImage;
use backdrop_core::{
    compose_scene as core_compose, compose_scene_to_png, BackgroundSpec, Rgb, ShadowParams,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible background description.
///
/// `mode` selects the fill: `"flat"`, `"gradient"`, or `"transparent"`.
/// Colors are `#RRGGBB` strings. A gradient runs from `color1` at the bottom
/// edge to `color2` at the top; a missing `color2` defaults to white.
///
/// An unrecognized `mode` is treated as `"transparent"`: the background is
/// decorative, and a bad mode string should degrade the fill rather than
/// fail the whole composite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsBackgroundSpec {
    /// Fill mode: "flat", "gradient", or "transparent"
    #[serde(default)]
    pub mode: String,
    /// Primary color (#RRGGBB); fill color for flat, bottom stop for gradient
    #[serde(default)]
    pub color1: Option<String>,
    /// Secondary color (#RRGGBB); gradient top stop, defaults to white
    #[serde(default)]
    pub color2: Option<String>,
}

impl JsBackgroundSpec {
    /// Convert to the core spec, validating colors.
    fn to_spec(&self) -> Result<BackgroundSpec, JsValue> {
        let parse = |s: &String| {
            Rgb::from_hex(s).map_err(|e| JsValue::from_str(&e.to_string()))
        };

        match self.mode.as_str() {
            "flat" => {
                let color1 = self
                    .color1
                    .as_ref()
                    .ok_or_else(|| JsValue::from_str("Flat background requires color1"))?;
                Ok(BackgroundSpec::Flat {
                    color: parse(color1)?,
                })
            }
            "gradient" => {
                let color1 = self
                    .color1
                    .as_ref()
                    .ok_or_else(|| JsValue::from_str("Gradient background requires color1"))?;
                let top = self.color2.as_ref().map(parse).transpose()?;
                Ok(BackgroundSpec::gradient(parse(color1)?, top))
            }
            // "transparent" and anything unrecognized: defined passthrough
            _ => Ok(BackgroundSpec::Transparent),
        }
    }
}

/// JavaScript-compatible shadow overrides.
///
/// All fields are optional; missing fields keep the standard Studio look
/// (translucent black, 15px drop, 20px blur).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsShadowParams {
    /// Shadow color as #RRGGBB
    #[serde(default)]
    pub color: Option<String>,
    /// Shadow opacity (0.0 to 1.0)
    #[serde(default)]
    pub opacity: Option<f32>,
    /// Vertical drop in pixels
    #[serde(default)]
    pub y_drop: Option<f32>,
    /// Blur radius in pixels
    #[serde(default)]
    pub blur_radius: Option<f32>,
}

impl JsShadowParams {
    /// Merge overrides into the default parameters.
    fn to_params(&self) -> Result<ShadowParams, JsValue> {
        let mut params = ShadowParams::default();
        if let Some(color) = &self.color {
            params.color =
                Rgb::from_hex(color).map_err(|e| JsValue::from_str(&e.to_string()))?;
        }
        if let Some(opacity) = self.opacity {
            params.opacity = opacity;
        }
        if let Some(y_drop) = self.y_drop {
            params.y_drop = y_drop;
        }
        if let Some(blur_radius) = self.blur_radius {
            params.blur_radius = blur_radius;
        }
        Ok(params)
    }
}

/// Deserialize the background object, treating null/undefined as transparent.
fn background_from_value(value: JsValue) -> Result<BackgroundSpec, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(BackgroundSpec::Transparent);
    }
    let js_spec: JsBackgroundSpec =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_spec.to_spec()
}

/// Deserialize shadow overrides, treating null/undefined as the defaults.
fn shadow_from_value(value: JsValue) -> Result<ShadowParams, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(ShadowParams::default());
    }
    let js_params: JsShadowParams =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_params.to_params()
}

/// Compose a flattened scene from decoded images.
///
/// The mask drives registration and the drop shadow; passing `undefined`
/// composes the object over the background with no shadow and no
/// registration.
///
/// # Arguments
///
/// * `object` - Background-removed cutout (canvas dimensions come from it)
/// * `mask` - Silhouette mask from the viewport capture, if available
/// * `background` - Background description (`JsBackgroundSpec` shape)
/// * `shadow` - Shadow overrides (`JsShadowParams` shape), or `undefined`
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = compose_scene(cutout, mask,
///   { mode: 'gradient', color1: '#0a1a2f' }, undefined);
/// ctx.putImageData(
///   new ImageData(new Uint8ClampedArray(result.pixels()), result.width, result.height),
///   0, 0);
/// ```
#[wasm_bindgen]
pub fn compose_scene(
    object: &JsRasterImage,
    mask: Option<JsRasterImage>,
    background: JsValue,
    shadow: JsValue,
) -> Result<JsRasterImage, JsValue> {
    let spec = background_from_value(background)?;
    let params = shadow_from_value(shadow)?;

    let object_raster = object.to_raster();
    let mask_raster = mask.map(|m| m.to_raster());

    core_compose(&object_raster, mask_raster.as_ref(), &spec, &params)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compose a scene straight from encoded image bytes, returning PNG bytes.
///
/// This is the one-call path the Studio generation flow uses: cutout bytes
/// from the background-removal step, mask bytes from the viewport capture,
/// PNG out for display and download.
///
/// The object bytes must decode or the call fails. The mask bytes are
/// best-effort: an unreadable mask logs a console warning and composes
/// without shadow or registration instead of aborting.
#[wasm_bindgen]
pub fn compose_scene_from_bytes(
    object_bytes: &[u8],
    mask_bytes: Option<Vec<u8>>,
    background: JsValue,
    shadow: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let spec = background_from_value(background)?;
    let params = shadow_from_value(shadow)?;

    let object = backdrop_core::decode::decode_image(object_bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mask = match mask_bytes {
        Some(bytes) => match backdrop_core::decode::decode_image(&bytes) {
            Ok(mask) => Some(mask),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "Backdrop: mask image could not be decoded ({}); compositing without shadow",
                    e
                )));
                None
            }
        },
        None => None,
    };

    compose_scene_to_png(&object, mask.as_ref(), &spec, &params)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
