use crate::core::math::{normalize_radians, Vector2};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position, heading angle, and scale applied to a shape's base outline.
///
/// The angle is in radians using the screen convention (zero points along
/// positive x, positive angle turns clockwise on screen). Poses are owned by
/// the simulation driver and passed to [Shape::update](crate::Shape::update)
/// each tick; the core never caches one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose<T = f64> {
    pub position: Vector2<T>,
    pub angle: T,
    pub scale: T,
}

impl<T> Pose<T>
where
    T: Real,
{
    /// Pose at `(x, y)` with heading `angle` and unit scale.
    pub fn new(x: T, y: T, angle: T) -> Self {
        Pose {
            position: Vector2::new(x, y),
            angle,
            scale: T::one(),
        }
    }

    /// Pose with an explicit scale multiplier.
    pub fn with_scale(x: T, y: T, angle: T, scale: T) -> Self {
        Pose {
            scale,
            ..Pose::new(x, y, angle)
        }
    }

    /// The zero pose: origin position, zero angle, unit scale. Applying it
    /// leaves a base outline unchanged.
    pub fn identity() -> Self {
        Pose::new(T::zero(), T::zero(), T::zero())
    }

    /// This pose moved by `(dx, dy)`, e.g. a velocity integrated for one
    /// tick.
    pub fn translated_by(&self, dx: T, dy: T) -> Self {
        Pose {
            position: Vector2::new(self.position.x + dx, self.position.y + dy),
            ..*self
        }
    }

    /// This pose turned by `delta` radians, with the accumulated angle kept
    /// normalized into `[0, 2PI]`.
    pub fn rotated_by(&self, delta: T) -> Self {
        Pose {
            angle: normalize_radians(self.angle + delta),
            ..*self
        }
    }
}

impl<T> Default for Pose<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Pose::identity()
    }
}
