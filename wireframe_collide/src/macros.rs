/// Macro used for fuzzy equality test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        let (left_val, right_val) = (&$left, &$right);
        if !(left_val.fuzzy_eq(*right_val)) {
            panic!(
                r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                &*left_val, &*right_val
            )
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left_val, right_val, eps_val) = (&$left, &$right, &$eps);
        if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
            panic!(
                r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
   eps: `{:?}`"#,
                &*left_val, &*right_val, &*eps_val
            )
        }
    }};
}

/// Builds a `Vec` of [Vector2](crate::Vector2) vertices from a list of
/// `(x, y)` tuples, in outline order.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::{outline_points, Vector2};
/// let outline = outline_points![(10.0, 0.0), (-4.0, 3.0), (-4.0, -3.0)];
/// assert_eq!(outline.len(), 3);
/// assert_eq!(outline[0], Vector2::new(10.0, 0.0));
/// ```
#[macro_export]
macro_rules! outline_points {
    ($( ($x:expr, $y:expr) ),* $(,)?) => {
        vec![$( $crate::Vector2::new($x, $y) ),*]
    };
}
