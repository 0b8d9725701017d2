//! 2D shape transform and polygon collision detection for vector-drawn
//! ("wireframe") arcade shapes.
//!
//! A [Shape] is an ordered list of vertices centered at the origin. Each
//! simulation tick a driver supplies a [Pose] (position, heading angle,
//! scale) to [Shape::update], which recomputes the posed "current" outline;
//! [shapes_collide] then decides whether two posed outlines intersect by
//! testing every edge pair for a segment crossing. The driver reads
//! [Shape::current] to draw.
//!
//! Everything uses the screen coordinate convention: x grows rightward, y
//! grows downward, and positive rotation is clockwise on screen.
//!
//! Two interchangeable segment crossing algorithms are provided behind the
//! [SegSegCross] trait: the orientation based test ([OrientCross], the
//! default) and the slope/intercept based alternative
//! ([SlopeInterceptCross]). See [core::math] for both.
//!
//! # Examples
//!
//! ```
//! use wireframe_collide::{outline_points, Pose, Shape};
//!
//! let square = outline_points![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
//! let mut player = Shape::from_points(square.clone()).expect("outline");
//! let mut rock = Shape::from_points(square).expect("outline");
//!
//! // each tick: transform, then test
//! player.update(&Pose::new(0.0, 0.0, 0.1));
//! rock.update(&Pose::new(0.5, 0.5, 0.0));
//! assert!(player.collides_with(&rock));
//! ```
#[macro_use]
mod macros;

pub mod core;
pub mod shape;

pub use crate::core::math::{vec2, OrientCross, SegSegCross, SlopeInterceptCross, Vector2};
pub use crate::core::traits::{FuzzyEq, FuzzyOrd, Real};
pub use crate::shape::*;
