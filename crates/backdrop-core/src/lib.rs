//! Backdrop Core - Scene compositing library
//!
//! This crate provides the core compositing functionality for Backdrop,
//! including content-bounds analysis, mask alignment, background rendering,
//! shadow synthesis, and the flattening pipeline that produces the final
//! product shot.

pub mod align;
pub mod bounds;
pub mod compose;
pub mod decode;
pub mod encode;
pub mod raster;

pub use align::{solve_alignment, solve_centering, AlignmentTransform};
pub use bounds::{analyze_bounds, ContentBounds};
pub use compose::{compose_scene, compose_scene_from_bytes, compose_scene_to_png, ComposeError};
pub use raster::RasterImage;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not of the form `#RRGGBB`.
    #[error("Invalid color string: expected #RRGGBB, got {0:?}")]
    InvalidFormat(String),
}

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from individual channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color string (the format the Studio UI emits).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidFormat(s.to_string()))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::InvalidFormat(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidFormat(s.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

/// Background fill for the composed scene.
///
/// The gradient direction is fixed: `bottom` at the bottom edge of the canvas,
/// `top` at the top edge. The Studio UI only ever requests vertical gradients,
/// so the direction is a convention here rather than a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BackgroundSpec {
    /// Leave the canvas fully transparent.
    #[default]
    Transparent,
    /// Solid fill with a single color.
    Flat { color: Rgb },
    /// Vertical two-stop gradient, bottom to top.
    Gradient { bottom: Rgb, top: Rgb },
}

impl BackgroundSpec {
    /// Create a gradient spec. A missing second stop defaults to white.
    pub fn gradient(bottom: Rgb, top: Option<Rgb>) -> Self {
        Self::Gradient {
            bottom,
            top: top.unwrap_or(Rgb::WHITE),
        }
    }
}

/// Parameters for the synthetic drop shadow.
///
/// The defaults model a light source from directly above: the silhouette is
/// dropped straight down, recolored to translucent black, and softened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowParams {
    /// Shadow color (applied to every opaque silhouette pixel).
    pub color: Rgb,
    /// Shadow opacity (0.0 to 1.0), multiplied into the silhouette's alpha.
    pub opacity: f32,
    /// Vertical drop in pixels.
    pub y_drop: f32,
    /// Blur radius in pixels (CSS-style radius; sigma is radius / 2).
    pub blur_radius: f32,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            opacity: 0.25,
            y_drop: 15.0,
            blur_radius: 20.0,
        }
    }
}

impl ShadowParams {
    /// Create shadow parameters with the standard Studio look.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#112233"), Ok(Rgb::new(0x11, 0x22, 0x33)));
        assert_eq!(Rgb::from_hex("#ffffff"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#FFFFFF"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::BLACK));
    }

    #[test]
    fn test_rgb_from_hex_rejects_malformed() {
        for bad in ["112233", "#12345", "#1234567", "#gg0000", "", "#"] {
            assert!(Rgb::from_hex(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_background_spec_default_is_transparent() {
        assert_eq!(BackgroundSpec::default(), BackgroundSpec::Transparent);
    }

    #[test]
    fn test_gradient_missing_top_defaults_to_white() {
        let spec = BackgroundSpec::gradient(Rgb::new(10, 20, 30), None);
        assert_eq!(
            spec,
            BackgroundSpec::Gradient {
                bottom: Rgb::new(10, 20, 30),
                top: Rgb::WHITE,
            }
        );
    }

    #[test]
    fn test_shadow_params_defaults() {
        let params = ShadowParams::new();
        assert_eq!(params.color, Rgb::BLACK);
        assert!((params.opacity - 0.25).abs() < f32::EPSILON);
        assert!((params.y_drop - 15.0).abs() < f32::EPSILON);
        assert!((params.blur_radius - 20.0).abs() < f32::EPSILON);
    }
}
