use super::FuzzyEq;

/// Fuzzy ordering comparisons built on top of [FuzzyEq].
///
/// The comparisons are "sticky" toward equality: `fuzzy_gt` treats values
/// within epsilon as greater-or-equal, `fuzzy_lt` as less-or-equal.
pub trait FuzzyOrd: FuzzyEq {
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// [FuzzyOrd::fuzzy_gt_eps] using the default epsilon.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// [FuzzyOrd::fuzzy_lt_eps] using the default epsilon.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Tests if `self` lies between `min` and `max` inclusive within epsilon.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_collide::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(2.0f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// assert!(!2.5f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// [FuzzyOrd::fuzzy_in_range_eps] using the default epsilon.
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
