//! Alignment and centering solvers.
//!
//! The alignment solver maps the generated cutout's footprint onto the
//! silhouette mask's footprint with a uniform scale and a translation. The
//! centering solver produces the extra offset that moves the mask's centroid
//! to the canvas center, so the final composition stays centered even when
//! the viewport capture placed the subject off-center.
//!
//! Both solvers treat invalid bounds as "nothing to align against" and return
//! their identity transforms rather than erroring.

use crate::bounds::ContentBounds;
use serde::{Deserialize, Serialize};

/// Lowest scale ratio accepted as a plausible size match.
pub const SCALE_MIN: f32 = 0.7;
/// Highest scale ratio accepted as a plausible size match.
pub const SCALE_MAX: f32 = 1.3;

/// A uniform scale plus translation mapping the cutout onto the mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentTransform {
    /// Uniform scale factor, always within [`SCALE_MIN`, `SCALE_MAX`].
    pub scale: f32,
    /// Horizontal translation in canvas pixels.
    pub offset_x: f32,
    /// Vertical translation in canvas pixels.
    pub offset_y: f32,
}

impl AlignmentTransform {
    /// The transform that leaves a layer untouched.
    pub const IDENTITY: AlignmentTransform = AlignmentTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

impl Default for AlignmentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Solve for the transform that overlays `candidate` onto `reference`.
///
/// The scale is the average of the independent X and Y box ratios, which
/// tolerates the mild aspect-ratio drift the generation step introduces
/// without distorting the object the way a non-uniform fit would.
///
/// A computed scale outside [`SCALE_MIN`, `SCALE_MAX`] usually means a
/// garbage generation rather than a real size difference, so it is discarded
/// in favor of parity (1.0). The zero-extent and NaN ratios produced by
/// degenerate boxes land on the same fallback. The translation then places
/// the candidate's scaled centroid exactly on the reference centroid.
///
/// Returns [`AlignmentTransform::IDENTITY`] when either bounds is invalid.
pub fn solve_alignment(
    reference: &ContentBounds,
    candidate: &ContentBounds,
) -> AlignmentTransform {
    if !reference.valid || !candidate.valid {
        return AlignmentTransform::IDENTITY;
    }

    let scale_x = reference.width as f32 / candidate.width as f32;
    let scale_y = reference.height as f32 / candidate.height as f32;
    let averaged = (scale_x + scale_y) / 2.0;

    let scale = if (SCALE_MIN..=SCALE_MAX).contains(&averaged) {
        averaged
    } else {
        1.0
    };

    AlignmentTransform {
        scale,
        offset_x: reference.center_x - candidate.center_x * scale,
        offset_y: reference.center_y - candidate.center_y * scale,
    }
}

/// Solve for the offset that moves the reference centroid to the canvas
/// center.
///
/// Returns `(0.0, 0.0)` when the bounds are invalid, leaving the composition
/// uncentered rather than guessing.
pub fn solve_centering(
    reference: &ContentBounds,
    canvas_width: u32,
    canvas_height: u32,
) -> (f32, f32) {
    if !reference.valid {
        return (0.0, 0.0);
    }

    (
        canvas_width as f32 / 2.0 - reference.center_x,
        canvas_height as f32 / 2.0 - reference.center_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bounds for a box spanning (min_x, min_y) to (max_x, max_y).
    fn bounds(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> ContentBounds {
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

    #[test]
    fn test_identical_bounds_give_identity() {
        let b = bounds(10, 10, 110, 210);
        let transform = solve_alignment(&b, &b);

        assert!((transform.scale - 1.0).abs() < 1e-6);
        assert!(transform.offset_x.abs() < 1e-4);
        assert!(transform.offset_y.abs() < 1e-4);
    }

    #[test]
    fn test_invalid_reference_gives_identity() {
        let invalid = ContentBounds::invalid(100, 100);
        let candidate = bounds(0, 0, 50, 50);

        assert_eq!(
            solve_alignment(&invalid, &candidate),
            AlignmentTransform::IDENTITY
        );
        assert_eq!(
            solve_alignment(&candidate, &invalid),
            AlignmentTransform::IDENTITY
        );
    }

    #[test]
    fn test_scale_within_window_is_applied() {
        // Reference box 120 wide/tall, candidate 100: ratio 1.2
        let reference = bounds(0, 0, 120, 120);
        let candidate = bounds(0, 0, 100, 100);

        let transform = solve_alignment(&reference, &candidate);
        assert!((transform.scale - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_implausible_scale_falls_back_to_parity() {
        // Ratio 4.0 signals a bad generation, not a size difference
        let reference = bounds(0, 0, 200, 200);
        let candidate = bounds(0, 0, 50, 50);

        let transform = solve_alignment(&reference, &candidate);
        assert!((transform.scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scale_just_outside_window_rejected() {
        let reference = bounds(0, 0, 140, 140);
        let candidate = bounds(0, 0, 100, 100);

        // 1.4 is outside the acceptance window
        let transform = solve_alignment(&reference, &candidate);
        assert!((transform.scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_extent_candidate_falls_back_to_parity() {
        let reference = bounds(0, 0, 100, 100);
        // Single-pixel content: zero-width, zero-height box
        let candidate = bounds(40, 40, 40, 40);

        let transform = solve_alignment(&reference, &candidate);
        assert!((transform.scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_offset_moves_candidate_centroid_onto_reference() {
        let reference = bounds(100, 100, 200, 200); // center (150, 150)
        let candidate = bounds(0, 0, 100, 100); // center (50, 50)

        let transform = solve_alignment(&reference, &candidate);
        assert!((transform.scale - 1.0).abs() < 1e-6);
        assert!((transform.offset_x - 100.0).abs() < 1e-4);
        assert!((transform.offset_y - 100.0).abs() < 1e-4);

        // The scaled centroid lands exactly on the reference centroid
        let landed_x = candidate.center_x * transform.scale + transform.offset_x;
        let landed_y = candidate.center_y * transform.scale + transform.offset_y;
        assert!((landed_x - reference.center_x).abs() < 1e-4);
        assert!((landed_y - reference.center_y).abs() < 1e-4);
    }

    #[test]
    fn test_averaged_axis_ratios() {
        // X ratio 1.2, Y ratio 1.0: averaged scale 1.1
        let reference = bounds(0, 0, 120, 100);
        let candidate = bounds(0, 0, 100, 100);

        let transform = solve_alignment(&reference, &candidate);
        assert!((transform.scale - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_centering_moves_centroid_to_canvas_center() {
        let reference = bounds(50, 50, 150, 150); // center (100, 100)

        let (dx, dy) = solve_centering(&reference, 400, 500);
        assert!((dx - 100.0).abs() < f32::EPSILON);
        assert!((dy - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_centering_invalid_bounds_is_zero() {
        let invalid = ContentBounds::invalid(400, 500);
        assert_eq!(solve_centering(&invalid, 400, 500), (0.0, 0.0));
    }

    #[test]
    fn test_centering_already_centered_is_zero() {
        let reference = bounds(150, 150, 250, 250); // center (200, 200)
        let (dx, dy) = solve_centering(&reference, 400, 400);
        assert!(dx.abs() < f32::EPSILON);
        assert!(dy.abs() < f32::EPSILON);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a valid bounds box within a 1024x1024 canvas.
    fn bounds_strategy() -> impl Strategy<Value = ContentBounds> {
        (0u32..512, 0u32..512, 0u32..512, 0u32..512).prop_map(|(x, y, w, h)| {
            let (min_x, min_y) = (x, y);
            let (max_x, max_y) = (x + w, y + h);
            ContentBounds {
                min_x,
                min_y,
                max_x,
                max_y,
                width: w,
                height: h,
                center_x: min_x as f32 + w as f32 / 2.0,
                center_y: min_y as f32 + h as f32 / 2.0,
                valid: true,
            }
        })
    }

    proptest! {
        /// Property: the solved scale always lies in the acceptance window.
        #[test]
        fn prop_scale_always_plausible(
            reference in bounds_strategy(),
            candidate in bounds_strategy(),
        ) {
            let transform = solve_alignment(&reference, &candidate);
            prop_assert!(transform.scale >= SCALE_MIN);
            prop_assert!(transform.scale <= SCALE_MAX);
        }

        /// Property: the transform is always finite.
        #[test]
        fn prop_transform_finite(
            reference in bounds_strategy(),
            candidate in bounds_strategy(),
        ) {
            let transform = solve_alignment(&reference, &candidate);
            prop_assert!(transform.scale.is_finite());
            prop_assert!(transform.offset_x.is_finite());
            prop_assert!(transform.offset_y.is_finite());
        }

        /// Property: solving a bounds against itself never moves it.
        #[test]
        fn prop_self_alignment_is_identity(b in bounds_strategy()) {
            let transform = solve_alignment(&b, &b);
            prop_assert!((transform.scale - 1.0).abs() < 1e-5);
            prop_assert!(transform.offset_x.abs() < 1e-2);
            prop_assert!(transform.offset_y.abs() < 1e-2);
        }

        /// Property: centering then re-measuring lands on the canvas center.
        #[test]
        fn prop_centering_lands_on_center(
            b in bounds_strategy(),
            (cw, ch) in (1u32..2048, 1u32..2048),
        ) {
            let (dx, dy) = solve_centering(&b, cw, ch);
            let moved_x = b.center_x + dx;
            let moved_y = b.center_y + dy;
            prop_assert!((moved_x - cw as f32 / 2.0).abs() < 1e-3);
            prop_assert!((moved_y - ch as f32 / 2.0).abs() < 1e-3);
        }
    }
}
