/// Trait for epsilon based equality comparisons of floating point values.
///
/// Exact float equality is rarely meaningful after geometric arithmetic, so
/// comparisons across the crate (and its tests) go through this trait with a
/// per-type default epsilon.
///
/// # Examples
///
/// ```
/// # use wireframe_collide::core::traits::*;
/// assert!((0.1 + 0.2).fuzzy_eq(0.3));
/// assert!(1e-9_f64.fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used by the comparisons without an `_eps` suffix.
    fn fuzzy_epsilon() -> Self;

    /// Returns true if `self` and `other` are within `fuzzy_epsilon` of each
    /// other.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Returns true if `self` is within `fuzzy_epsilon` of zero.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// [FuzzyEq::fuzzy_eq_eps] using the default epsilon.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// [FuzzyEq::fuzzy_eq_zero_eps] using the default epsilon.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-8);
impl_fuzzy_eq!(f64, 1.0e-8);
