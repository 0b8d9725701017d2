//! Core/common math for 2D vectors, angles, and segment crossing tests.
mod base_math;
mod seg_seg_intersect;
mod vector2;

pub use base_math::*;
pub use seg_seg_intersect::{
    seg_seg_cross_orient, seg_seg_cross_slope, seg_seg_cross_slope_eps, OrientCross, SegSegCross,
    SlopeInterceptCross,
};
pub use vector2::{vec2, Vector2};
