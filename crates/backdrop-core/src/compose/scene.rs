//! The scene compositor.
//!
//! Runs the full registration-and-flattening pipeline for one generation
//! request: analyze the mask and cutout bounds, solve alignment and global
//! centering, render the background, synthesize the shadow, and draw the
//! object layer on top. Each invocation is independent and deterministic
//! given its inputs; nothing is cached between runs.
//!
//! # Stage order
//!
//! ```text
//! raw images -> bounds -> transforms -> background -> shadow -> object -> PNG
//! ```
//!
//! Data flows strictly one way. The canvas takes the object image's native
//! dimensions (the mask is produced from the same viewport capture, so the
//! two are expected to match), and layers are drawn in fixed z-order:
//! background, shadow, object.

use thiserror::Error;

use super::background::render_background;
use super::layer::overlay_image;
use super::shadow::synthesize_shadow;
use crate::align::{solve_alignment, solve_centering};
use crate::bounds::{analyze_bounds, ContentBounds};
use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_png, EncodeError};
use crate::raster::RasterImage;
use crate::{BackgroundSpec, ShadowParams};

/// Errors that abort a composition.
///
/// Degraded inputs (invalid bounds, implausible scale, missing mask) never
/// abort; the pipeline falls back to neutral defaults for those. Only an
/// unusable object image or a codec failure surfaces here, and both are
/// recoverable by retrying the upstream generation.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The object image has a zero dimension, so there is no canvas to draw.
    #[error("Object image has invalid dimensions: {width}x{height}")]
    InvalidObject { width: u32, height: u32 },

    /// The object image bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The composed canvas could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Compose a flattened scene from decoded rasters.
///
/// The mask drives registration: its bounds are the alignment reference and
/// the centering target, and its shape casts the shadow. Passing `None`
/// (mask missing or unreadable) composes the object over the background with
/// no shadow and no registration, which is the documented degraded mode.
pub fn compose_scene(
    object: &RasterImage,
    mask: Option<&RasterImage>,
    background: &BackgroundSpec,
    shadow: &ShadowParams,
) -> Result<RasterImage, ComposeError> {
    if object.is_empty() {
        return Err(ComposeError::InvalidObject {
            width: object.width,
            height: object.height,
        });
    }

    let (width, height) = (object.width, object.height);

    let object_bounds = analyze_bounds(object);
    let mask_bounds = mask
        .map(analyze_bounds)
        .unwrap_or_else(|| ContentBounds::invalid(width, height));

    let alignment = solve_alignment(&mask_bounds, &object_bounds);
    let global_offset = solve_centering(&mask_bounds, width, height);

    // The compositor owns the only mutable canvas in the pipeline
    let mut canvas = render_background(background, width, height);

    if let Some(mask_image) = mask {
        let shadow_layer = synthesize_shadow(mask_image, width, height, global_offset, shadow);
        overlay_image(&mut canvas, &shadow_layer, 0.0, 0.0, 1.0);
    }

    // Global centering first, then the alignment offset, then scale: the
    // offsets are part of the mapping, so the scale stays anchored at the
    // aligned position
    overlay_image(
        &mut canvas,
        object,
        global_offset.0 + alignment.offset_x,
        global_offset.1 + alignment.offset_y,
        alignment.scale,
    );

    Ok(canvas)
}

/// Compose a scene and encode it to PNG bytes.
pub fn compose_scene_to_png(
    object: &RasterImage,
    mask: Option<&RasterImage>,
    background: &BackgroundSpec,
    shadow: &ShadowParams,
) -> Result<Vec<u8>, ComposeError> {
    let canvas = compose_scene(object, mask, background, shadow)?;
    Ok(encode_png(&canvas)?)
}

/// Compose a scene from encoded image bytes.
///
/// The object bytes must decode or the whole composition fails. The mask
/// bytes are best-effort: a missing or unreadable mask downgrades to the
/// no-mask composition instead of aborting.
pub fn compose_scene_from_bytes(
    object_bytes: &[u8],
    mask_bytes: Option<&[u8]>,
    background: &BackgroundSpec,
    shadow: &ShadowParams,
) -> Result<Vec<u8>, ComposeError> {
    let object = decode_image(object_bytes)?;
    let mask = mask_bytes.and_then(|bytes| decode_image(bytes).ok());

    compose_scene_to_png(&object, mask.as_ref(), background, shadow)
}
