//! Scene composition: background, shadow, and object layers.
//!
//! This module implements the back half of the pipeline. The solvers in
//! [`crate::bounds`] and [`crate::align`] decide *where* things go; the
//! stages here actually produce pixels:
//!
//! - [`background`] renders the bottom layer from a [`crate::BackgroundSpec`]
//! - [`shadow`] synthesizes a soft drop shadow from the silhouette mask
//! - [`layer`] provides the blend and transformed-draw primitives
//! - [`scene`] runs the whole pipeline in fixed stage order
//!
//! # Layering
//!
//! The z-order is fixed: background, then shadow, then object. The shadow is
//! an independent layer derived from the mask; the object layer is never
//! blurred or shifted by shadow synthesis.

pub mod background;
pub mod layer;
pub mod scene;
pub mod shadow;

pub use background::render_background;
pub use layer::{blend_over, overlay_image};
pub use scene::{
    compose_scene, compose_scene_from_bytes, compose_scene_to_png, ComposeError,
};
pub use shadow::synthesize_shadow;
