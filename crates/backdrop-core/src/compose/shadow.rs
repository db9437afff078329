//! Drop-shadow synthesis from the silhouette mask.
//!
//! The shadow is derived from the mask shape, never from the object layer:
//! the mask's alpha is stamped onto a canvas-sized layer shifted down by the
//! drop distance (light source from directly above), every stamped pixel is
//! recolored to the shadow color with its alpha scaled by the shadow opacity
//! (keep-alpha, replace-color), and the result is softened with a
//! Gaussian-style blur. The object layer itself is never blurred or shifted;
//! the compositor draws this layer strictly between the background and the
//! object.

use crate::raster::RasterImage;
use crate::ShadowParams;

/// Synthesize a canvas-sized shadow layer from the mask.
///
/// `global_offset` is the centering offset applied to the whole composition;
/// the shadow follows it so it stays under the re-centered subject, then
/// drops a further `params.y_drop` pixels. Offsets are rounded to whole
/// pixels before stamping; the blur softens away any sub-pixel difference.
pub fn synthesize_shadow(
    mask: &RasterImage,
    canvas_width: u32,
    canvas_height: u32,
    global_offset: (f32, f32),
    params: &ShadowParams,
) -> RasterImage {
    let mut shadow = RasterImage::transparent(canvas_width, canvas_height);

    // Pre-tint the whole layer with the shadow color at zero alpha so the
    // blur never mixes stamped pixels with differently-colored transparency
    let color = params.color;
    for chunk in shadow.pixels.chunks_exact_mut(4) {
        chunk[0] = color.r;
        chunk[1] = color.g;
        chunk[2] = color.b;
    }

    let offset_x = global_offset.0.round() as i64;
    let offset_y = (global_offset.1 + params.y_drop).round() as i64;
    let opacity = params.opacity.clamp(0.0, 1.0);

    for (idx, chunk) in mask.pixels.chunks_exact(4).enumerate() {
        let alpha = chunk[3];
        if alpha == 0 {
            continue;
        }

        let x = (idx as u32) % mask.width;
        let y = (idx as u32) / mask.width;
        let dst_x = x as i64 + offset_x;
        let dst_y = y as i64 + offset_y;
        if dst_x < 0 || dst_y < 0 || dst_x >= canvas_width as i64 || dst_y >= canvas_height as i64
        {
            continue;
        }

        let stamped = (alpha as f32 * opacity).round().clamp(0.0, 255.0) as u8;
        let dst_idx = ((dst_y as u32 * canvas_width + dst_x as u32) * 4 + 3) as usize;
        shadow.pixels[dst_idx] = stamped;
    }

    blur_layer(shadow, params.blur_radius)
}

/// Apply a Gaussian-style blur to a layer.
///
/// The radius is the CSS-style blur radius the Studio UI speaks; the
/// equivalent Gaussian sigma is half of it. A zero radius returns the layer
/// unchanged.
fn blur_layer(layer: RasterImage, blur_radius: f32) -> RasterImage {
    if blur_radius <= 0.0 {
        return layer;
    }

    let sigma = blur_radius / 2.0;
    match layer.to_rgba_image() {
        Some(img) => RasterImage::from_rgba_image(image::imageops::fast_blur(&img, sigma)),
        None => layer,
    }
}
