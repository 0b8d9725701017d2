use super::Pose;
use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects the rotation formula applied by [transform_outline_styled].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TransformStyle {
    /// Standard 2D rotation about the origin, then scale, then translate.
    #[default]
    Standard,
    /// Flips the sign of the cosine term in the y component. Started life as
    /// a sign error; the tumbling spin it produces looked good enough to
    /// keep as a named alternative. Never the default.
    Mirrored,
}

/// Applies `pose` to the `base` outline, writing the posed vertices into
/// `out`.
///
/// Standard rotate-scale-translate per vertex:
///
/// ```text
/// out.x = scale * (base.x * cos(angle) - base.y * sin(angle)) + pos.x
/// out.y = scale * (base.x * sin(angle) + base.y * cos(angle)) + pos.y
/// ```
///
/// Pure and deterministic with no side effects beyond writing `out`.
/// `base` and `out` must have the same length.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::core::math::vec2;
/// # use wireframe_collide::{transform_outline, Pose};
/// let base = [vec2(1.0, 0.0), vec2(-1.0, 0.0)];
/// let mut out = base;
/// transform_outline(&base, &Pose::new(10.0, 5.0, 0.0), &mut out);
/// assert!(out[0].fuzzy_eq(vec2(11.0, 5.0)));
/// assert!(out[1].fuzzy_eq(vec2(9.0, 5.0)));
/// ```
pub fn transform_outline<T>(base: &[Vector2<T>], pose: &Pose<T>, out: &mut [Vector2<T>])
where
    T: Real,
{
    debug_assert_eq!(base.len(), out.len());

    let s = pose.angle.sin();
    let c = pose.angle.cos();
    for (v, out_v) in base.iter().zip(out.iter_mut()) {
        *out_v = Vector2::new(
            pose.scale * (v.x * c - v.y * s) + pose.position.x,
            pose.scale * (v.x * s + v.y * c) + pose.position.y,
        );
    }
}

/// Same as [transform_outline] with the rotation formula selected by
/// `style`.
pub fn transform_outline_styled<T>(
    base: &[Vector2<T>],
    pose: &Pose<T>,
    style: TransformStyle,
    out: &mut [Vector2<T>],
) where
    T: Real,
{
    match style {
        TransformStyle::Standard => transform_outline(base, pose, out),
        TransformStyle::Mirrored => {
            debug_assert_eq!(base.len(), out.len());

            let s = pose.angle.sin();
            let c = pose.angle.cos();
            for (v, out_v) in base.iter().zip(out.iter_mut()) {
                *out_v = Vector2::new(
                    pose.scale * (v.x * c - v.y * s) + pose.position.x,
                    pose.scale * (v.x * s - v.y * c) + pose.position.y,
                );
            }
        }
    }
}
