//! Shapes, poses, pose transforms, and polygon collision.
//!
//! A [Shape] holds an immutable base outline (vertices centered at the
//! origin) and the posed "current" outline the driver refreshes once per
//! tick with [Shape::update]. Collision queries ([shapes_collide]) read the
//! current outlines of both operands and never mutate; the driver is
//! responsible for updating poses before issuing collision queries for a
//! tick (transform, then test).
mod collide;
mod outline;
mod pose;
mod transform;

pub use collide::{shapes_collide, shapes_collide_with};
pub use outline::{Shape, ShapeError};
pub use pose::Pose;
pub use transform::{transform_outline, transform_outline_styled, TransformStyle};
