use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes
/// `7PI/4` and `5PI` becomes `PI`.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::core::math::*;
/// # use wireframe_collide::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// // anything between 0 and 2PI inclusive is left unchanged
/// assert!(normalize_radians(PI).fuzzy_eq(PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Squared distance between the points `p1` and `p2`.
#[inline]
pub fn dist_squared<T>(p1: Vector2<T>, p2: Vector2<T>) -> T
where
    T: Real,
{
    (p2 - p1).length_squared()
}

/// Orientation test value for the point triple `(p0, p1, point)`: the perp
/// dot product of `p1 - p0` and `point - p0`.
///
/// In the screen coordinate convention the sign gives the rotational sense of
/// the triple (zero when the three points are exactly collinear).
#[inline]
pub fn orient_test_value<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0)
}
