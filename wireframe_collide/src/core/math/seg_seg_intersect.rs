use super::{dist_squared, min_max, orient_test_value, Vector2};
use crate::core::traits::Real;

/// Capability to decide whether two line segments cross, given the four
/// endpoints.
///
/// Both crossing algorithms in this module implement the trait so the same
/// fixtures (or the polygon collision scan) can run against either one.
/// [OrientCross] is the default used for collision; [SlopeInterceptCross] is
/// the documented, tolerance-sensitive alternative.
pub trait SegSegCross<T>
where
    T: Real,
{
    /// Returns true if segment `a1`->`a2` crosses segment `b1`->`b2`.
    fn segs_cross(&self, a1: Vector2<T>, a2: Vector2<T>, b1: Vector2<T>, b2: Vector2<T>) -> bool;
}

/// Orientation based segment crossing test, see [seg_seg_cross_orient].
#[derive(Debug, Default, Clone, Copy)]
pub struct OrientCross;

impl<T> SegSegCross<T> for OrientCross
where
    T: Real,
{
    #[inline]
    fn segs_cross(&self, a1: Vector2<T>, a2: Vector2<T>, b1: Vector2<T>, b2: Vector2<T>) -> bool {
        seg_seg_cross_orient(a1, a2, b1, b2)
    }
}

/// Slope/intercept based segment crossing test, see [seg_seg_cross_slope_eps].
///
/// `tolerance` is the relative threshold at which a segment is classified as
/// vertical or horizontal instead of carrying a usable slope.
#[derive(Debug, Clone, Copy)]
pub struct SlopeInterceptCross<T = f64> {
    pub tolerance: T,
}

impl<T> SlopeInterceptCross<T>
where
    T: Real,
{
    pub fn new(tolerance: T) -> Self {
        SlopeInterceptCross { tolerance }
    }
}

impl<T> Default for SlopeInterceptCross<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        SlopeInterceptCross {
            tolerance: T::from(1e-6).unwrap(),
        }
    }
}

impl<T> SegSegCross<T> for SlopeInterceptCross<T>
where
    T: Real,
{
    #[inline]
    fn segs_cross(&self, a1: Vector2<T>, a2: Vector2<T>, b1: Vector2<T>, b2: Vector2<T>) -> bool {
        seg_seg_cross_slope_eps(a1, a2, b1, b2, self.tolerance)
    }
}

/// Returns true if open segment `a1`->`a2` properly crosses open segment
/// `b1`->`b2`, using orientation tests.
///
/// The endpoints of each segment must fall strictly on opposite sides of the
/// other segment's supporting line, checked in both directions with the sign
/// of [orient_test_value]. Any exactly collinear triple reports no crossing,
/// so segments that merely touch or overlap along a line are not crossings.
/// A dynamic simulation re-testing every tick never relies on exact float
/// equality, so this is an accepted limitation rather than a defect.
///
/// Zero length segments produce zero orientation values and report no
/// crossing with no special casing.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::core::math::*;
/// let crossing = seg_seg_cross_orient(
///     vec2(0.0, 0.0),
///     vec2(2.0, 2.0),
///     vec2(0.0, 2.0),
///     vec2(2.0, 0.0),
/// );
/// assert!(crossing);
/// ```
pub fn seg_seg_cross_orient<T>(
    a1: Vector2<T>,
    a2: Vector2<T>,
    b1: Vector2<T>,
    b2: Vector2<T>,
) -> bool
where
    T: Real,
{
    opposite_sides(a1, a2, b1, b2) && opposite_sides(b1, b2, a1, a2)
}

/// True if `p1` and `p2` lie strictly on opposite sides of the line through
/// `s1` and `s2`.
fn opposite_sides<T>(s1: Vector2<T>, s2: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> bool
where
    T: Real,
{
    let d1 = orient_test_value(s1, s2, p1);
    let d2 = orient_test_value(s1, s2, p2);
    (d1 > T::zero() && d2 < T::zero()) || (d1 < T::zero() && d2 > T::zero())
}

/// [seg_seg_cross_slope_eps] with the default classification tolerance of
/// `1e-6`.
pub fn seg_seg_cross_slope<T>(
    a1: Vector2<T>,
    a2: Vector2<T>,
    b1: Vector2<T>,
    b2: Vector2<T>,
) -> bool
where
    T: Real,
{
    seg_seg_cross_slope_eps(a1, a2, b1, b2, T::from(1e-6).unwrap())
}

/// Returns true if segment `a1`->`a2` crosses segment `b1`->`b2`, solving
/// the segments' line equations in slope/intercept form.
///
/// `tolerance` is relative: a segment is classified vertical when its x
/// extent is at most `tolerance` times its y extent, and horizontal for the
/// transposed condition. After a cheap axis aligned bounding box rejection
/// the classification selects one of five cases:
///
/// 1. both vertical: no crossing (parallel assumption),
/// 2. one vertical, other not horizontal: solve the x-as-function-of-y line
///    form and accept if the solved y lies in both segments' y ranges
///    (fuzzy inclusive),
/// 3. one vertical, other horizontal: crossing (the bounding boxes already
///    overlap),
/// 4. both horizontal: no crossing (parallel assumption),
/// 5. neither: solve `y = m*x + b` for both lines and accept if the solved x
///    lies in both segments' x ranges.
///
/// This algorithm is kept as the documented, less robust alternative to
/// [seg_seg_cross_orient]: the tolerance classification changes edge
/// behavior (e.g. case 3 asserts a crossing for axis aligned segments that
/// only touch). Zero length segments are rejected up front.
pub fn seg_seg_cross_slope_eps<T>(
    a1: Vector2<T>,
    a2: Vector2<T>,
    b1: Vector2<T>,
    b2: Vector2<T>,
    tolerance: T,
) -> bool
where
    T: Real,
{
    // degenerate zero length segments never cross anything
    if dist_squared(a1, a2).fuzzy_eq_zero() || dist_squared(b1, b2).fuzzy_eq_zero() {
        return false;
    }

    let (a_min_x, a_max_x) = min_max(a1.x, a2.x);
    let (a_min_y, a_max_y) = min_max(a1.y, a2.y);
    let (b_min_x, b_max_x) = min_max(b1.x, b2.x);
    let (b_min_y, b_max_y) = min_max(b1.y, b2.y);

    // cheap rejection, bounding boxes must overlap on both axes
    if a_max_x < b_min_x || b_max_x < a_min_x || a_max_y < b_min_y || b_max_y < a_min_y {
        return false;
    }

    use SegClass::*;
    match (classify(a1, a2, tolerance), classify(b1, b2, tolerance)) {
        // parallel assumption
        (Vertical, Vertical) | (Horizontal, Horizontal) => false,
        // perpendicular axis aligned segments with overlapping bounding
        // boxes must cross
        (Vertical, Horizontal) | (Horizontal, Vertical) => true,
        (Vertical, General) => vertical_crosses_general(a1, a2, b1, b2),
        (General, Vertical) => vertical_crosses_general(b1, b2, a1, a2),
        // a horizontal segment carries slope zero, the general solve handles
        // it
        (Horizontal, General) | (General, Horizontal) | (General, General) => {
            general_crosses_general(a1, a2, b1, b2)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegClass {
    Vertical,
    Horizontal,
    General,
}

fn classify<T>(p1: Vector2<T>, p2: Vector2<T>, tolerance: T) -> SegClass
where
    T: Real,
{
    let run = (p2.x - p1.x).abs();
    let rise = (p2.y - p1.y).abs();
    if run <= tolerance * rise {
        SegClass::Vertical
    } else if rise <= tolerance * run {
        SegClass::Horizontal
    } else {
        SegClass::General
    }
}

/// Crossing between a vertical segment `v1`->`v2` and a general (sloped,
/// not horizontal) segment `o1`->`o2`.
fn vertical_crosses_general<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    o1: Vector2<T>,
    o2: Vector2<T>,
) -> bool
where
    T: Real,
{
    // classification is approximate, every divide still gets a zero guard
    let o_dy = o2.y - o1.y;
    if o_dy == T::zero() {
        return false;
    }

    // the general segment as x = p * y + q, solved against the vertical
    // segment's x
    let p = (o2.x - o1.x) / o_dy;
    if p == T::zero() {
        return false;
    }
    let q = o1.x - p * o1.y;
    let y = (v1.x - q) / p;

    let (v_min_y, v_max_y) = min_max(v1.y, v2.y);
    let (o_min_y, o_max_y) = min_max(o1.y, o2.y);
    y.fuzzy_in_range(v_min_y, v_max_y) && y.fuzzy_in_range(o_min_y, o_max_y)
}

/// Crossing between two segments that both carry a usable slope.
fn general_crosses_general<T>(
    a1: Vector2<T>,
    a2: Vector2<T>,
    b1: Vector2<T>,
    b2: Vector2<T>,
) -> bool
where
    T: Real,
{
    // classification is approximate, every divide still gets a zero guard
    let a_dx = a2.x - a1.x;
    let b_dx = b2.x - b1.x;
    if a_dx == T::zero() || b_dx == T::zero() {
        return false;
    }

    let a_slope = (a2.y - a1.y) / a_dx;
    let b_slope = (b2.y - b1.y) / b_dx;
    let denom = a_slope - b_slope;
    if denom == T::zero() {
        // parallel assumption
        return false;
    }

    let a_intercept = a1.y - a_slope * a1.x;
    let b_intercept = b1.y - b_slope * b1.x;
    let x = (b_intercept - a_intercept) / denom;

    let (a_min_x, a_max_x) = min_max(a1.x, a2.x);
    let (b_min_x, b_max_x) = min_max(b1.x, b2.x);
    x.fuzzy_in_range(a_min_x, a_max_x) && x.fuzzy_in_range(b_min_x, b_max_x)
}
