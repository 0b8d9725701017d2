use super::Shape;
use crate::core::math::{OrientCross, SegSegCross};
use crate::core::traits::Real;

/// Tests whether the posed outlines of `a` and `b` intersect, using the
/// default orientation based crossing test.
///
/// Reads both shapes' current outlines (never the base outlines), so the
/// driver must have updated poses for the tick before querying.
///
/// One outline wholly containing the other without any edge crossing
/// reports no collision. That containment gap is a known, accepted
/// limitation of the edge scan.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::{outline_points, shapes_collide, Pose, Shape};
/// let square = outline_points![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
/// let mut a = Shape::from_points(square.clone()).expect("outline");
/// let mut b = Shape::from_points(square).expect("outline");
///
/// a.update(&Pose::identity());
/// b.update(&Pose::new(0.5, 0.5, 0.0));
/// assert!(shapes_collide(&a, &b));
///
/// b.update(&Pose::new(100.0, 100.0, 0.0));
/// assert!(!shapes_collide(&a, &b));
/// ```
#[inline]
pub fn shapes_collide<T>(a: &Shape<T>, b: &Shape<T>) -> bool
where
    T: Real,
{
    shapes_collide_with(a, b, &OrientCross)
}

/// [shapes_collide] with the segment crossing test chosen by the caller.
///
/// Every edge of `a` (wraparound edge included) is tested against every edge
/// of `b`, returning on the first crossing found; the full O(Na * Nb) scan
/// only happens when the shapes do not touch. Outline vertex counts stay in
/// the single to low double digits, so no spatial pruning or caching between
/// calls is attempted.
pub fn shapes_collide_with<T, C>(a: &Shape<T>, b: &Shape<T>, cross_test: &C) -> bool
where
    T: Real,
    C: SegSegCross<T> + ?Sized,
{
    for (a1, a2) in a.edges() {
        for (b1, b2) in b.edges() {
            if cross_test.segs_cross(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    false
}
