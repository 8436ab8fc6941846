use magma_types::{Associative, Commutative, Identity, Magma};
use num::Float;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Tropical addition `(ℝ ∪ {-∞}, max, -∞)`.
///
/// A commutative monoid. Paired with [`Addition`](super::Addition) as
/// multiplication it forms the max-plus semiring, where `-∞` annihilates:
///
/// ```
/// use magma::instances::{Addition, Max};
/// use magma::SemiRing;
///
/// let max_plus = SemiRing::new(Max::<f64>::new(), Addition::<f64>::new());
/// assert_eq!(max_plus.add(&3.0, &5.0), 5.0);
/// assert_eq!(max_plus.mul(&3.0, &5.0), 8.0);
/// assert!(max_plus.does_zero_annihilate(&7.0));
/// ```
///
/// `NaN` is not part of the carrier set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Max<T>(PhantomData<T>);

impl<T> Max<T> {
    /// Create the max monoid on `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Max<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Max<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Max<{}>", std::any::type_name::<T>())
    }
}

impl<T: Float + Debug> Magma for Max<T> {
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        if lhs >= rhs {
            *lhs
        } else {
            *rhs
        }
    }
}

impl<T: Float + Debug> Associative for Max<T> {}

impl<T: Float + Debug> Commutative for Max<T> {}

impl<T: Float + Debug> Identity for Max<T> {
    #[inline(always)]
    fn identity(&self) -> T {
        T::neg_infinity()
    }
}

/// Tropical addition `(ℝ ∪ {+∞}, min, +∞)`.
///
/// A commutative monoid; with [`Addition`](super::Addition) it forms the
/// min-plus semiring used for shortest paths.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Min<T>(PhantomData<T>);

impl<T> Min<T> {
    /// Create the min monoid on `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Min<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Min<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min<{}>", std::any::type_name::<T>())
    }
}

impl<T: Float + Debug> Magma for Min<T> {
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        if lhs <= rhs {
            *lhs
        } else {
            *rhs
        }
    }
}

impl<T: Float + Debug> Associative for Min<T> {}

impl<T: Float + Debug> Commutative for Min<T> {}

impl<T: Float + Debug> Identity for Min<T> {
    #[inline(always)]
    fn identity(&self) -> T {
        T::infinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Cycle, Seeded};
    use crate::instances::Addition;
    use magma_types::{Distributive, Generator, SemiRing};
    use test_log::test;

    #[test]
    fn test_max_identity() {
        let max = Max::<f64>::new();
        assert_eq!(max.op(&3.0, &5.0), 5.0);
        assert_eq!(max.op(&max.identity(), &-100.0), -100.0);
        assert!(max.is_identity(&mut Cycle::new(vec![-1e300, 0.0, 42.0])));
    }

    #[test]
    fn test_min_identity() {
        let min = Min::<f32>::new();
        assert_eq!(min.op(&3.0, &5.0), 3.0);
        assert!(min.is_identity(&mut Cycle::new(vec![1e30, 0.0, -7.5])));
    }

    #[test]
    fn test_max_plus_semiring() {
        let max_plus = SemiRing::new(Max::<f64>::new(), Addition::<f64>::new());
        let mut seeded = Seeded::new(-100i32..=100);
        let mut gen = || f64::from(seeded.generate());
        for _ in 0..32 {
            assert!(max_plus.is_left_distributive(&mut gen));
            assert!(max_plus.is_right_distributive(&mut gen));
            assert!(max_plus.is_zero_annihilating(&mut gen));
        }
    }

    #[test]
    fn test_min_plus_semiring() {
        let min_plus = SemiRing::new(Min::<f64>::new(), Addition::<f64>::new());
        assert_eq!(min_plus.zero(), f64::INFINITY);
        assert_eq!(min_plus.one(), 0.0);
        assert!(min_plus.does_zero_annihilate(&3.5));
        // 1 + min(2, 3) = min(1 + 2, 1 + 3)
        assert!(min_plus.is_left_distributive(&mut Cycle::new(vec![1.0, 2.0, 3.0])));
    }

    #[test]
    fn test_max_is_commutative() {
        let max = Max::<f64>::new();
        assert!(max.is_commutative(&mut Cycle::new(vec![1.0, -1.0])));
        assert!(max.is_associative(&mut Cycle::new(vec![2.0, 9.0, -3.0])));
        // the additive operation is not distributive over the multiplicative one
        let swapped = magma_types::DistributivePair::new(Addition::<f64>::new(), Max::<f64>::new());
        assert!(!swapped.is_left_distributive(&mut Cycle::new(vec![3.0, 1.0, 2.0])));
    }
}
