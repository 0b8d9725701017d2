use super::{shapes_collide, transform_outline, transform_outline_styled, Pose, TransformStyle};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use thiserror::Error;

/// Error produced when a [Shape] cannot be constructed. Construction either
/// succeeds or yields no shape at all; there is no partially built state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The parallel x and y coordinate slices differ in length.
    #[error("coordinate count mismatch: {x_count} x values vs {y_count} y values")]
    CoordCountMismatch { x_count: usize, y_count: usize },
    /// An outline needs at least two vertices to form its edge loop.
    #[error("outline requires at least 2 vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// A rigid vector-drawn shape: an immutable base outline (ordered vertices,
/// conceptually centered at the origin) plus the posed "current" outline
/// recomputed in place by [Shape::update].
///
/// The outline is always treated as closed: the last vertex connects back to
/// the first. Two vertices form a degenerate open shape (a projectile
/// streak, say) whose closing edge coincides with its only real edge; three
/// or more form a closed polygon. `current` always has the same length as
/// the base outline and starts out equal to it (zero pose).
///
/// Each shape exclusively owns its two vertex buffers, so reading two shapes
/// during a collision query is free of aliasing.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::{outline_points, Pose, Shape};
/// let mut ship = Shape::from_points(outline_points![
///     (10.0, 0.0),
///     (-4.0, 3.0),
///     (-4.0, -3.0),
/// ])
/// .expect("ship outline");
///
/// ship.update(&Pose::new(400.0, 320.0, 0.0));
/// assert_eq!(ship.current().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Shape<T = f64> {
    base: Vec<Vector2<T>>,
    current: Vec<Vector2<T>>,
}

impl<T> Shape<T>
where
    T: Real,
{
    /// Creates a shape from its base outline vertices.
    ///
    /// The current outline starts equal to the base. Errors with
    /// [ShapeError::TooFewVertices] when fewer than two vertices are given.
    pub fn from_points(points: Vec<Vector2<T>>) -> Result<Self, ShapeError> {
        if points.len() < 2 {
            return Err(ShapeError::TooFewVertices {
                count: points.len(),
            });
        }

        let current = points.clone();
        Ok(Shape {
            base: points,
            current,
        })
    }

    /// Creates a shape from parallel x and y coordinate slices.
    ///
    /// Errors with [ShapeError::CoordCountMismatch] when the slices differ
    /// in length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_collide::{Shape, ShapeError};
    /// let err = Shape::from_coords(&[10.0, -4.0, -4.0], &[0.0, 3.0]).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     ShapeError::CoordCountMismatch {
    ///         x_count: 3,
    ///         y_count: 2
    ///     }
    /// );
    /// ```
    pub fn from_coords(xs: &[T], ys: &[T]) -> Result<Self, ShapeError> {
        if xs.len() != ys.len() {
            return Err(ShapeError::CoordCountMismatch {
                x_count: xs.len(),
                y_count: ys.len(),
            });
        }

        Self::from_points(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Vector2::new(x, y))
                .collect(),
        )
    }

    /// Number of vertices in the outline.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.base.len()
    }

    /// The base outline at zero pose.
    #[inline]
    pub fn base(&self) -> &[Vector2<T>] {
        &self.base
    }

    /// The posed outline as of the last [Shape::update] (equal to the base
    /// outline before the first update). This is what a renderer draws and
    /// what collision queries read.
    #[inline]
    pub fn current(&self) -> &[Vector2<T>] {
        &self.current
    }

    /// Recomputes the current outline from the base outline and `pose`
    /// using the standard rotation.
    pub fn update(&mut self, pose: &Pose<T>) {
        transform_outline(&self.base, pose, &mut self.current);
    }

    /// Same as [Shape::update] with the rotation formula selected by
    /// `style`.
    pub fn update_styled(&mut self, pose: &Pose<T>, style: TransformStyle) {
        transform_outline_styled(&self.base, pose, style, &mut self.current);
    }

    /// Iterates the edges of the posed outline: for N vertices, the N
    /// consecutive pairs `(v[i], v[(i + 1) % N])`, the last vertex wrapping
    /// back to the first. A two vertex shape yields its single real edge
    /// twice (once reversed).
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.current.len();
        (0..n).map(move |i| (self.current[i], self.current[(i + 1) % n]))
    }

    /// True if this shape's posed outline crosses `other`'s, using the
    /// default orientation based crossing test. See [shapes_collide].
    #[inline]
    pub fn collides_with(&self, other: &Shape<T>) -> bool {
        shapes_collide(self, other)
    }
}
