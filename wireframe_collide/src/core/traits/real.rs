use super::FuzzyOrd;

/// Trait representing the real scalar type the geometry is generic over
/// (`f32` or `f64`), with fuzzy comparing and ordering.
pub trait Real:
    num_traits::real::Real + num_traits::Bounded + FuzzyOrd + std::default::Default + std::fmt::Debug + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }
}
