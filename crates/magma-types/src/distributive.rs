//! Distributivity of one operation over another.

use crate::generator::Generator;
use crate::operation::Magma;
use crate::trace::{settle, Law, Observer, Silent};

/// Element type shared by both operations of a [`Distributive`] structure.
pub type Element<D> = <<D as Distributive>::Additive as Magma>::Elem;

/// A pair of operations on the same carrier set where `·` (multiplicative)
/// is expected to distribute over `+` (additive).
///
/// - left: `a · (b + c) = (a · b) + (a · c)`
/// - right: `(b + c) · a = (b · a) + (c · a)`
///
/// Both checks draw `a`, `b`, `c` in that order.
pub trait Distributive {
    /// The operation being distributed over.
    type Additive: Magma;

    /// The distributing operation.
    type Multiplicative: Magma<Elem = <Self::Additive as Magma>::Elem>;

    /// The additive operation.
    fn additive(&self) -> &Self::Additive;

    /// The multiplicative operation.
    fn multiplicative(&self) -> &Self::Multiplicative;

    /// Sample left distributivity.
    fn is_left_distributive<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<<Self::Additive as Magma>::Elem> + ?Sized,
    {
        self.is_left_distributive_traced(generator, &mut Silent)
    }

    /// [`Distributive::is_left_distributive`], reporting both sides to
    /// `observer`.
    fn is_left_distributive_traced<G, O>(&self, generator: &mut G, observer: &mut O) -> bool
    where
        G: Generator<<Self::Additive as Magma>::Elem> + ?Sized,
        O: Observer<<Self::Additive as Magma>::Elem> + ?Sized,
    {
        let (add, mul) = (self.additive(), self.multiplicative());
        let a = generator.generate();
        let b = generator.generate();
        let c = generator.generate();
        let lhs = mul.op(&a, &add.op(&b, &c));
        let rhs = add.op(&mul.op(&a, &b), &mul.op(&a, &c));
        settle(Law::LeftDistributivity, lhs, rhs, observer)
    }

    /// Sample right distributivity.
    fn is_right_distributive<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<<Self::Additive as Magma>::Elem> + ?Sized,
    {
        self.is_right_distributive_traced(generator, &mut Silent)
    }

    /// [`Distributive::is_right_distributive`], reporting both sides to
    /// `observer`.
    fn is_right_distributive_traced<G, O>(&self, generator: &mut G, observer: &mut O) -> bool
    where
        G: Generator<<Self::Additive as Magma>::Elem> + ?Sized,
        O: Observer<<Self::Additive as Magma>::Elem> + ?Sized,
    {
        let (add, mul) = (self.additive(), self.multiplicative());
        let a = generator.generate();
        let b = generator.generate();
        let c = generator.generate();
        let lhs = mul.op(&add.op(&b, &c), &a);
        let rhs = add.op(&mul.op(&b, &a), &mul.op(&c, &a));
        settle(Law::RightDistributivity, lhs, rhs, observer)
    }
}

/// Two arbitrary operations on the same carrier set, owned by the pair.
///
/// The ring family in [`crate::ring`] constrains its operations to the
/// relevant structures; this type does not, so it can also hold pairs that
/// fail to distribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributivePair<A, M> {
    additive: A,
    multiplicative: M,
}

impl<A, M> DistributivePair<A, M>
where
    A: Magma,
    M: Magma<Elem = A::Elem>,
{
    /// Pair `multiplicative` with the `additive` operation it should
    /// distribute over.
    pub fn new(additive: A, multiplicative: M) -> Self {
        Self {
            additive,
            multiplicative,
        }
    }
}

impl<A, M> Distributive for DistributivePair<A, M>
where
    A: Magma,
    M: Magma<Elem = A::Elem>,
{
    type Additive = A;
    type Multiplicative = M;

    #[inline(always)]
    fn additive(&self) -> &A {
        &self.additive
    }

    #[inline(always)]
    fn multiplicative(&self) -> &M {
        &self.multiplicative
    }
}

impl<D: Distributive + ?Sized> Distributive for &D {
    type Additive = D::Additive;
    type Multiplicative = D::Multiplicative;

    #[inline(always)]
    fn additive(&self) -> &Self::Additive {
        (**self).additive()
    }

    #[inline(always)]
    fn multiplicative(&self) -> &Self::Multiplicative {
        (**self).multiplicative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::FnSemigroup;
    use crate::trace::Recorder;
    use test_log::test;

    fn counting(step: i64) -> impl FnMut() -> i64 {
        let mut i = 0;
        move || {
            i += step;
            i
        }
    }

    fn plus() -> FnSemigroup<i64, fn(&i64, &i64) -> i64> {
        FnSemigroup::new(|a, b| a + b)
    }

    #[test]
    fn test_integer_ring_distributes() {
        let pair = DistributivePair::new(plus(), FnSemigroup::new(|a: &i64, b: &i64| a * b));
        let mut gen = counting(3);
        assert!(pair.is_left_distributive(&mut gen));
        assert!(pair.is_right_distributive(&mut gen));
    }

    #[test]
    fn test_addition_does_not_distribute_over_multiplication() {
        let pair = DistributivePair::new(FnSemigroup::new(|a: &i64, b: &i64| a * b), plus());
        let mut gen = counting(1);
        assert!(!pair.is_left_distributive(&mut gen));
        assert!(!pair.is_right_distributive(&mut gen));
    }

    /// `x · y = y` distributes over `+` from the left only.
    #[test]
    fn test_right_projection_is_left_distributive_only() {
        let pair = DistributivePair::new(plus(), FnSemigroup::new(|_: &i64, b: &i64| *b));
        assert!(pair.is_left_distributive(&mut counting(1)));
        assert!(!pair.is_right_distributive(&mut counting(1)));
    }

    /// `x · y = x` distributes over `+` from the right only.
    ///
    /// The right law is checked as `(b + c) · a = (b · a) + (c · a)`. Reusing
    /// the left-hand side `a · (b + c)` of the left law here would make this
    /// pair fail both checks.
    #[test]
    fn test_left_projection_is_right_distributive_only() {
        let pair = DistributivePair::new(plus(), FnSemigroup::new(|a: &i64, _: &i64| *a));

        let mut left = Recorder::new();
        assert!(!pair.is_left_distributive_traced(&mut counting(1), &mut left));
        // a = 1, b = 2, c = 3: 1 · 5 = 1 vs (1 · 2) + (1 · 3) = 2
        assert_eq!((left.samples()[0].lhs, left.samples()[0].rhs), (1, 2));

        let mut right = Recorder::new();
        assert!(pair.is_right_distributive_traced(&mut counting(1), &mut right));
        // (2 + 3) · 1 = 5 vs (2 · 1) + (3 · 1) = 5
        assert_eq!((right.samples()[0].lhs, right.samples()[0].rhs), (5, 5));
        assert_eq!(right.samples()[0].law, Law::RightDistributivity);
    }

    #[test]
    fn test_distributive_by_reference() {
        let pair = DistributivePair::new(plus(), FnSemigroup::new(|a: &i64, b: &i64| a * b));
        let by_ref = &pair;
        assert!(by_ref.is_left_distributive(&mut counting(2)));
        assert_eq!(by_ref.additive().op(&2, &3), 5);
        assert_eq!(by_ref.multiplicative().op(&2, &3), 6);
    }
}
