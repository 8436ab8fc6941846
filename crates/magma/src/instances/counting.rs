use magma_types::{Associative, Commutative, Identity, Magma};
use num::Float;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// A tropical value paired with the number of ways it was reached.
#[derive(Copy, Clone, PartialEq)]
pub struct Counted<T> {
    /// The tropical value (max-plus semantics).
    pub value: T,
    /// The number of optimal paths achieving `value`.
    pub count: u64,
}

impl<T> Counted<T> {
    /// Create a counted value.
    #[inline(always)]
    pub fn new(value: T, count: u64) -> Self {
        Self { value, count }
    }

    /// A single path of weight `value`.
    #[inline(always)]
    pub fn single(value: T) -> Self {
        Self { value, count: 1 }
    }
}

impl<T: Debug> Debug for Counted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counted({:?}, {})", self.value, self.count)
    }
}

impl<T: fmt::Display> fmt::Display for Counted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (×{})", self.value, self.count)
    }
}

/// Counting tropical addition:
///
/// - `(n₁, c₁) ⊕ (n₂, c₂) = (n₁, c₁)` if `n₁ > n₂`
/// - `(n₁, c₁) ⊕ (n₂, c₂) = (n₂, c₂)` if `n₁ < n₂`
/// - `(n, c₁) ⊕ (n, c₂) = (n, c₁ + c₂)`
///
/// Identity `(-∞, 0)`. Counts saturate at `u64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CountingMax<T>(PhantomData<T>);

impl<T> CountingMax<T> {
    /// Create the counting max monoid.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CountingMax<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for CountingMax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountingMax<{}>", std::any::type_name::<T>())
    }
}

impl<T: Float + Debug> Magma for CountingMax<T> {
    type Elem = Counted<T>;

    fn op(&self, lhs: &Counted<T>, rhs: &Counted<T>) -> Counted<T> {
        if lhs.value > rhs.value {
            *lhs
        } else if lhs.value < rhs.value {
            *rhs
        } else {
            Counted::new(lhs.value, lhs.count.saturating_add(rhs.count))
        }
    }
}

impl<T: Float + Debug> Associative for CountingMax<T> {}

impl<T: Float + Debug> Commutative for CountingMax<T> {}

impl<T: Float + Debug> Identity for CountingMax<T> {
    #[inline(always)]
    fn identity(&self) -> Counted<T> {
        Counted::new(T::neg_infinity(), 0)
    }
}

/// Counting tropical multiplication: `(n₁, c₁) ⊗ (n₂, c₂) = (n₁ + n₂, c₁ · c₂)`.
///
/// Identity `(0, 1)`. Counts saturate at `u64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CountingPlus<T>(PhantomData<T>);

impl<T> CountingPlus<T> {
    /// Create the counting plus monoid.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CountingPlus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for CountingPlus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountingPlus<{}>", std::any::type_name::<T>())
    }
}

impl<T: Float + Debug> Magma for CountingPlus<T> {
    type Elem = Counted<T>;

    #[inline(always)]
    fn op(&self, lhs: &Counted<T>, rhs: &Counted<T>) -> Counted<T> {
        Counted::new(lhs.value + rhs.value, lhs.count.saturating_mul(rhs.count))
    }
}

impl<T: Float + Debug> Associative for CountingPlus<T> {}

impl<T: Float + Debug> Commutative for CountingPlus<T> {}

impl<T: Float + Debug> Identity for CountingPlus<T> {
    #[inline(always)]
    fn identity(&self) -> Counted<T> {
        Counted::new(T::zero(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Cycle;
    use magma_types::{Distributive, SemiRing};
    use test_log::test;

    fn counting_semiring() -> SemiRing<CountingMax<f64>, CountingPlus<f64>> {
        SemiRing::new(CountingMax::new(), CountingPlus::new())
    }

    #[test]
    fn test_add_keeps_larger() {
        let add = CountingMax::<f64>::new();
        let a = Counted::new(5.0, 2);
        let b = Counted::new(3.0, 7);
        assert_eq!(add.op(&a, &b), a);
        assert_eq!(add.op(&b, &a), a);
    }

    #[test]
    fn test_add_merges_ties() {
        let add = CountingMax::<f64>::new();
        let tie = add.op(&Counted::new(4.0, 2), &Counted::new(4.0, 3));
        assert_eq!(tie, Counted::new(4.0, 5));
    }

    #[test]
    fn test_mul() {
        let mul = CountingPlus::<f64>::new();
        assert_eq!(
            mul.op(&Counted::new(3.0, 2), &Counted::new(5.0, 3)),
            Counted::new(8.0, 6)
        );
    }

    #[test]
    fn test_identities() {
        let semiring = counting_semiring();
        let values = vec![
            Counted::new(1.0, 1),
            Counted::new(-2.0, 4),
            Counted::new(0.0, 3),
        ];
        let mut gen = Cycle::new(values);
        for _ in 0..3 {
            assert!(semiring.additive().is_identity(&mut gen));
            assert!(semiring.multiplicative().is_identity(&mut gen));
            assert!(semiring.is_zero_annihilating(&mut gen));
        }
    }

    #[test]
    fn test_distributive_with_ties() {
        let semiring = counting_semiring();
        // b and c tie, so their counts merge before and after distributing
        let mut gen = Cycle::new(vec![
            Counted::new(1.0, 2),
            Counted::new(3.0, 1),
            Counted::new(3.0, 4),
        ]);
        assert!(semiring.is_left_distributive(&mut gen));
        assert!(semiring.is_right_distributive(&mut gen));
    }

    #[test]
    fn test_path_counting() {
        // Two hops 0 -> k -> 2 through k ∈ {1, 2}, both of weight 5
        let semiring = counting_semiring();
        let via_1 = semiring.mul(&Counted::single(2.0), &Counted::single(3.0));
        let via_2 = semiring.mul(&Counted::single(1.0), &Counted::single(4.0));
        let best = semiring.add(&via_1, &via_2);
        assert_eq!(best, Counted::new(5.0, 2));
    }

    #[test]
    fn test_large_counts_saturate() {
        let semiring = counting_semiring();
        let many = Counted::new(1.0, u64::MAX);
        assert_eq!(
            semiring.mul(&many, &Counted::new(1.0, 2)),
            Counted::new(2.0, u64::MAX)
        );
        assert_eq!(
            semiring.add(&many, &Counted::new(1.0, 5)),
            Counted::new(1.0, u64::MAX)
        );
        assert_eq!(semiring.mul(&many, &semiring.zero()).count, 0);

        let mut gen = Cycle::new(vec![
            many,
            Counted::new(1.0, 3),
            Counted::new(1.0, u64::MAX / 2),
        ]);
        assert!(semiring.additive().is_associative(&mut gen));
        assert!(semiring.multiplicative().is_associative(&mut gen));
        assert!(semiring.is_left_distributive(&mut gen));
    }

    #[test]
    fn test_display_debug() {
        let a = Counted::new(5.0f64, 3);
        assert_eq!(format!("{}", a), "5 (×3)");
        assert_eq!(format!("{:?}", a), "Counted(5.0, 3)");
    }
}
