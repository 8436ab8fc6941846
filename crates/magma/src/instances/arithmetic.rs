use magma_types::{Associative, Commutative, Identity, Inverse, Magma};
use num::{Float, Num, Signed};
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Standard addition `(T, +, 0)`.
///
/// - every [`Num`] type: commutative monoid (ℕ under `+` for unsigned `T`)
/// - [`Signed`] types: commutative group with inverse `-a` (ℤ, ℝ)
///
/// Overflow follows the native type; sample values must stay in range.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Addition<T>(PhantomData<T>);

impl<T> Addition<T> {
    /// Create the additive structure on `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Addition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Addition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addition<{}>", std::any::type_name::<T>())
    }
}

impl<T: Num + Clone + Debug> Magma for Addition<T> {
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}

impl<T: Num + Clone + Debug> Associative for Addition<T> {}

impl<T: Num + Clone + Debug> Commutative for Addition<T> {}

impl<T: Num + Clone + Debug> Identity for Addition<T> {
    #[inline(always)]
    fn identity(&self) -> T {
        T::zero()
    }
}

impl<T: Num + Signed + Clone + Debug> Inverse for Addition<T> {
    #[inline(always)]
    fn inverse(&self, a: &T) -> T {
        -a.clone()
    }
}

/// Standard multiplication `(T, ·, 1)`.
///
/// - every [`Num`] type: commutative monoid
/// - [`Float`] types: commutative group on the non-zero values with
///   inverse `1 / a`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Multiplication<T>(PhantomData<T>);

impl<T> Multiplication<T> {
    /// Create the multiplicative structure on `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Multiplication<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Multiplication<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiplication<{}>", std::any::type_name::<T>())
    }
}

impl<T: Num + Clone + Debug> Magma for Multiplication<T> {
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() * rhs.clone()
    }
}

impl<T: Num + Clone + Debug> Associative for Multiplication<T> {}

impl<T: Num + Clone + Debug> Commutative for Multiplication<T> {}

impl<T: Num + Clone + Debug> Identity for Multiplication<T> {
    #[inline(always)]
    fn identity(&self) -> T {
        T::one()
    }
}

impl<T: Float + Debug> Inverse for Multiplication<T> {
    #[inline(always)]
    fn inverse(&self, a: &T) -> T {
        a.recip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Cycle, Stepping};
    use magma_types::{
        CommutativeGroup, CommutativeMonoid, CommutativeRing, Distributive, Field, SemiRing,
    };
    use quickcheck_macros::quickcheck;
    use test_log::test;

    fn assert_commutative_group<S: CommutativeGroup>(_: &S) {}
    fn assert_commutative_monoid<S: CommutativeMonoid>(_: &S) {}

    #[test]
    fn test_integer_addition_is_commutative_group() {
        let integers = Addition::<i64>::new();
        assert_commutative_group(&integers);
        assert_eq!(integers.identity(), 0);
        assert_eq!(integers.inverse(&12), -12);

        let mut gen = Stepping::new(0i64, 3);
        assert!(integers.is_associative(&mut gen));
        assert!(integers.is_commutative(&mut gen));
        assert!(integers.is_identity(&mut gen));
        assert!(integers.is_inverse(&mut gen));
    }

    #[test]
    fn test_integer_multiplication_is_commutative_monoid() {
        let integers = Multiplication::<i64>::new();
        assert_commutative_monoid(&integers);
        assert_eq!(integers.identity(), 1);

        let mut gen = Stepping::new(0i64, 2);
        assert!(integers.is_associative(&mut gen));
        assert!(integers.is_identity(&mut gen));
        assert!(integers.is_commutative(&mut gen));
    }

    #[test]
    fn test_natural_addition_is_commutative_monoid() {
        let naturals = Addition::<u32>::new();
        assert_commutative_monoid(&naturals);
        assert!(naturals.is_identity(&mut Stepping::new(0u32, 1)));
    }

    #[test]
    fn test_real_multiplicative_group() {
        let reals = Multiplication::<f64>::new();
        assert_commutative_group(&reals);
        assert!(reals.is_inverse(&mut Cycle::new(vec![2.0, 4.0, 0.5, -8.0])));
        assert_eq!(reals.inverse(&4.0), 0.25);
    }

    #[test]
    fn test_natural_semiring() {
        let naturals = SemiRing::new(Addition::<u32>::new(), Multiplication::<u32>::new());
        let mut gen = Stepping::new(0u32, 1);
        assert!(naturals.is_left_distributive(&mut gen));
        assert!(naturals.is_right_distributive(&mut gen));
        assert!(naturals.is_zero_annihilating(&mut gen));
    }

    #[test]
    fn test_real_field() {
        let reals = Field::new(Addition::<f64>::new(), Multiplication::<f64>::new())
            .expect("0 and 1 differ");
        assert_eq!(reals.zero(), 0.0);
        assert_eq!(reals.one(), 1.0);
        assert_eq!(reals.recip(&2.0), 0.5);
        assert!(reals.is_left_distributive(&mut Stepping::new(0.0, 2.0)));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Addition::<i32>::new()), "Addition<i32>");
        assert_eq!(format!("{:?}", Multiplication::<u8>::new()), "Multiplication<u8>");
    }

    #[quickcheck]
    fn integer_ring_laws(a: i16, b: i16, c: i16) -> bool {
        let ring = CommutativeRing::new(Addition::<i64>::new(), Multiplication::<i64>::new());
        let mut gen = Cycle::new(vec![a as i64, b as i64, c as i64]);
        ring.is_left_distributive(&mut gen) && ring.is_right_distributive(&mut gen)
    }

    #[quickcheck]
    fn integer_multiplication_identity(a: i32) -> bool {
        let integers = Multiplication::<i64>::new();
        integers.op(&integers.identity(), &(a as i64)) == a as i64
    }

    #[quickcheck]
    fn natural_zero_annihilates(a: u32) -> bool {
        let naturals = SemiRing::new(Addition::<u64>::new(), Multiplication::<u64>::new());
        naturals.does_zero_annihilate(&(a as u64))
    }
}
