//! Content-bounds analysis.
//!
//! Scans an image's alpha channel and reports the bounding box and centroid
//! of its visible content. The silhouette mask and the generated cutout are
//! both run through this analysis, and the two results drive the alignment
//! and centering solvers.
//!
//! A pixel counts as content only when its alpha exceeds a conservative
//! threshold, so the anti-aliasing fringe left around cutout edges by
//! background removal does not inflate the box.

use crate::raster::RasterImage;
use serde::{Deserialize, Serialize};

/// Minimum alpha (exclusive, out of 255) for a pixel to count as content.
pub const VISIBILITY_THRESHOLD: u8 = 20;

/// The rectangular extent and centroid of an image's visible content.
///
/// When `valid` is false the image had no visible content; the box fields are
/// zeroed and the center falls back to the canvas center so that callers that
/// do not branch on validity still get usable coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentBounds {
    /// Leftmost content column.
    pub min_x: u32,
    /// Topmost content row.
    pub min_y: u32,
    /// Rightmost content column.
    pub max_x: u32,
    /// Bottommost content row.
    pub max_y: u32,
    /// Box width, `max_x - min_x` (0 for single-column content).
    pub width: u32,
    /// Box height, `max_y - min_y` (0 for single-row content).
    pub height: u32,
    /// Horizontal centroid, `min_x + width / 2`.
    pub center_x: f32,
    /// Vertical centroid, `min_y + height / 2`.
    pub center_y: f32,
    /// Whether any visible content was found.
    pub valid: bool,
}

impl ContentBounds {
    /// The fallback value for an image with no visible content.
    pub fn invalid(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
            width: 0,
            height: 0,
            center_x: canvas_width as f32 / 2.0,
            center_y: canvas_height as f32 / 2.0,
            valid: false,
        }
    }
}

/// Scan an image and compute the bounds of its visible content.
///
/// Single pass over every pixel; a pixel qualifies iff its alpha is greater
/// than [`VISIBILITY_THRESHOLD`]. Returns [`ContentBounds::invalid`] when no
/// pixel qualifies (including for zero-sized images).
pub fn analyze_bounds(image: &RasterImage) -> ContentBounds {
    if image.is_empty() {
        return ContentBounds::invalid(image.width, image.height);
    }

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (idx, chunk) in image.pixels.chunks_exact(4).enumerate() {
        if chunk[3] > VISIBILITY_THRESHOLD {
            let x = (idx as u32) % image.width;
            let y = (idx as u32) / image.width;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            found = true;
        }
    }

    if !found {
        return ContentBounds::invalid(image.width, image.height);
    }

    let width = max_x - min_x;
    let height = max_y - min_y;

    ContentBounds {
        min_x,
        min_y,
        max_x,
        max_y,
        width,
        height,
        center_x: min_x as f32 + width as f32 / 2.0,
        center_y: min_y as f32 + height as f32 / 2.0,
        valid: true,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
