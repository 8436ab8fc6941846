//! Property traits layered onto a [`Magma`].
//!
//! Implementing one of these traits asserts the law for the whole carrier
//! set. The provided `is_*` methods only sample it: they draw values from a
//! [`Generator`], evaluate both sides and compare. A `true` verdict is
//! evidence, not a proof.

use crate::generator::Generator;
use crate::operation::Magma;
use crate::trace::{settle, Law, Observer, Silent};

/// `a, b, c ∈ T ⟹ op(op(a, b), c) = op(a, op(b, c))`
///
/// Associativity is closed downwards: if `R ⊆ T` then `op` is associative
/// on `R` as well.
pub trait Associative: Magma {
    /// Sample associativity with three values drawn as `a`, `b`, `c`.
    fn is_associative<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
    {
        self.is_associative_traced(generator, &mut Silent)
    }

    /// [`Associative::is_associative`], reporting both sides to `observer`.
    fn is_associative_traced<G, O>(&self, generator: &mut G, observer: &mut O) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
        O: Observer<Self::Elem> + ?Sized,
    {
        let a = generator.generate();
        let b = generator.generate();
        let c = generator.generate();
        let lhs = self.op(&self.op(&a, &b), &c);
        let rhs = self.op(&a, &self.op(&b, &c));
        settle(Law::Associativity, lhs, rhs, observer)
    }
}

/// `a, b ∈ T ⟹ op(a, b) = op(b, a)`
pub trait Commutative: Magma {
    /// Sample commutativity with two values drawn as `a`, `b`.
    fn is_commutative<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
    {
        self.is_commutative_traced(generator, &mut Silent)
    }

    /// [`Commutative::is_commutative`], reporting both sides to `observer`.
    fn is_commutative_traced<G, O>(&self, generator: &mut G, observer: &mut O) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
        O: Observer<Self::Elem> + ?Sized,
    {
        let a = generator.generate();
        let b = generator.generate();
        let lhs = self.op(&a, &b);
        let rhs = self.op(&b, &a);
        settle(Law::Commutativity, lhs, rhs, observer)
    }
}

/// `∃e ∈ T, ∀a ∈ T: op(a, e) = op(e, a) = a`
pub trait Identity: Magma {
    /// The identity element `e`.
    fn identity(&self) -> Self::Elem;

    /// Sample both identity laws with one value.
    fn is_identity<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
    {
        self.is_identity_traced(generator, &mut Silent)
    }

    /// [`Identity::is_identity`], reporting both comparisons to `observer`.
    fn is_identity_traced<G, O>(&self, generator: &mut G, observer: &mut O) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
        O: Observer<Self::Elem> + ?Sized,
    {
        let a = generator.generate();
        let e = self.identity();
        let left = settle(Law::LeftIdentity, self.op(&e, &a), a.clone(), observer);
        let right = settle(Law::RightIdentity, self.op(&a, &e), a, observer);
        left && right
    }
}

/// `∀a ∈ T, ∃a′ ∈ T: op(a, a′) = op(a′, a) = e`
pub trait Inverse: Identity {
    /// The inverse `a′` of `a`.
    fn inverse(&self, a: &Self::Elem) -> Self::Elem;

    /// Sample both inverse laws with one value.
    fn is_inverse<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
    {
        self.is_inverse_traced(generator, &mut Silent)
    }

    /// [`Inverse::is_inverse`], reporting both comparisons to `observer`.
    fn is_inverse_traced<G, O>(&self, generator: &mut G, observer: &mut O) -> bool
    where
        G: Generator<Self::Elem> + ?Sized,
        O: Observer<Self::Elem> + ?Sized,
    {
        let a = generator.generate();
        let inv = self.inverse(&a);
        let e = self.identity();
        let left = settle(Law::LeftInverse, self.op(&inv, &a), e.clone(), observer);
        let right = settle(Law::RightInverse, self.op(&a, &inv), e, observer);
        left && right
    }
}

impl<M: Associative + ?Sized> Associative for &M {}

impl<M: Commutative + ?Sized> Commutative for &M {}

impl<M: Identity + ?Sized> Identity for &M {
    #[inline(always)]
    fn identity(&self) -> Self::Elem {
        (**self).identity()
    }
}

impl<M: Inverse + ?Sized> Inverse for &M {
    #[inline(always)]
    fn inverse(&self, a: &Self::Elem) -> Self::Elem {
        (**self).inverse(a)
    }
}
