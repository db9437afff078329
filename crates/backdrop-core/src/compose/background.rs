//! Background rendering.
//!
//! Produces the bottom layer of the composition: a solid fill, a vertical
//! two-stop gradient, or a fully transparent canvas. Rows are stored
//! top-down, so "bottom of the canvas" is the last row.

use crate::raster::RasterImage;
use crate::{BackgroundSpec, Rgb};

/// Render a background layer of the given dimensions.
///
/// - `Flat` fills every pixel with the color, fully opaque.
/// - `Gradient` interpolates linearly from `bottom` at the bottom edge
///   (row `height - 1`) to `top` at row 0. The direction is fixed.
/// - `Transparent` produces an all-zero canvas.
pub fn render_background(spec: &BackgroundSpec, width: u32, height: u32) -> RasterImage {
    let mut canvas = RasterImage::transparent(width, height);

    match *spec {
        BackgroundSpec::Transparent => {}
        BackgroundSpec::Flat { color } => {
            for chunk in canvas.pixels.chunks_exact_mut(4) {
                chunk.copy_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
        BackgroundSpec::Gradient { bottom, top } => {
            for y in 0..height {
                // t runs 0 at the bottom row to 1 at the top row
                let t = if height > 1 {
                    (height - 1 - y) as f32 / (height - 1) as f32
                } else {
                    0.0
                };
                let row = lerp_rgb(bottom, top, t);
                let row_start = (y * width * 4) as usize;
                let row_end = row_start + (width * 4) as usize;
                for chunk in canvas.pixels[row_start..row_end].chunks_exact_mut(4) {
                    chunk.copy_from_slice(&[row.r, row.g, row.b, 255]);
                }
            }
        }
    }

    canvas
}

/// Linear interpolation between two colors, `t` in [0, 1].
fn lerp_rgb(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let lerp = |a: u8, b: u8| -> u8 {
        (a as f32 + (b as f32 - a as f32) * t)
            .clamp(0.0, 255.0)
            .round() as u8
    };
    Rgb {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
    }
}
