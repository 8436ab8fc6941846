//! Two-operation structures.
//!
//! | Structure | `(T, +)` | `(T, ·)` | Extra |
//! |-----------|----------|----------|-------|
//! | [`SemiRing`] | commutative monoid | monoid | zero annihilates |
//! | [`Ring`] | commutative group | monoid | |
//! | [`CommutativeRing`] | commutative group | commutative monoid | |
//! | [`Field`] | commutative group | commutative group on `T \ {0}` | `0 ≠ 1` |
//!
//! In every case `·` distributes over `+` from both sides; the sampled checks
//! come from [`Distributive`]. The component structures are owned; pass
//! references (`&A`) to share them between several rings.

use crate::distributive::Distributive;
use crate::error::{AlgebraError, Result};
use crate::generator::Generator;
use crate::operation::Magma;
use crate::structures::{CommutativeGroup, CommutativeMonoid, Monoid};
use crate::trace::{settle, Law, Observer, Silent};

macro_rules! impl_two_operation_structure {
    ($name:ident, $add:ident, $mul:ident) => {
        impl<A, M> $name<A, M>
        where
            A: $add,
            M: $mul + Magma<Elem = <A as Magma>::Elem>,
        {
            /// The additive identity `0`.
            #[inline]
            pub fn zero(&self) -> A::Elem {
                self.additive.identity()
            }

            /// The multiplicative identity `1`.
            #[inline]
            pub fn one(&self) -> A::Elem {
                self.multiplicative.identity()
            }

            /// `a + b`
            #[inline]
            pub fn add(&self, a: &A::Elem, b: &A::Elem) -> A::Elem {
                self.additive.op(a, b)
            }

            /// `a · b`
            #[inline]
            pub fn mul(&self, a: &A::Elem, b: &A::Elem) -> A::Elem {
                self.multiplicative.op(a, b)
            }
        }

        impl<A, M> Distributive for $name<A, M>
        where
            A: Magma,
            M: Magma<Elem = <A as Magma>::Elem>,
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
    };
}

/// A semiring `(T, +, ·)`.
///
/// `(T, +)` is a commutative monoid, lacking the additive inverse that
/// would make it a commutative group, and `(T, ·)` is a monoid. Multiplying
/// by the additive identity annihilates: `a · 0 = 0 · a = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemiRing<A, M> {
    additive: A,
    multiplicative: M,
}

impl<A, M> SemiRing<A, M>
where
    A: CommutativeMonoid,
    M: Monoid + Magma<Elem = <A as Magma>::Elem>,
{
    /// Combine an additive commutative monoid with a multiplicative monoid.
    pub fn new(additive: A, multiplicative: M) -> Self {
        Self {
            additive,
            multiplicative,
        }
    }

    /// Whether `a · 0 = 0` and `0 · a = 0` for the additive identity `0`.
    pub fn does_zero_annihilate(&self, a: &A::Elem) -> bool {
        self.does_zero_annihilate_traced(a, &mut Silent)
    }

    /// [`SemiRing::does_zero_annihilate`], reporting both comparisons to
    /// `observer`.
    pub fn does_zero_annihilate_traced<O>(&self, a: &A::Elem, observer: &mut O) -> bool
    where
        O: Observer<A::Elem> + ?Sized,
    {
        let zero = self.zero();
        let right = self.mul(a, &zero);
        let left = self.mul(&zero, a);
        let right = settle(Law::RightAnnihilation, right, zero.clone(), observer);
        let left = settle(Law::LeftAnnihilation, left, zero, observer);
        right && left
    }

    /// Sample zero annihilation with one value from `generator`.
    pub fn is_zero_annihilating<G>(&self, generator: &mut G) -> bool
    where
        G: Generator<A::Elem> + ?Sized,
    {
        let a = generator.generate();
        self.does_zero_annihilate(&a)
    }
}

impl_two_operation_structure!(SemiRing, CommutativeMonoid, Monoid);

/// A ring `(T, +, ·)`: `(T, +)` is a commutative group and `(T, ·)` is a
/// monoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ring<A, M> {
    additive: A,
    multiplicative: M,
}

impl<A, M> Ring<A, M>
where
    A: CommutativeGroup,
    M: Monoid + Magma<Elem = <A as Magma>::Elem>,
{
    /// Combine an additive commutative group with a multiplicative monoid.
    pub fn new(additive: A, multiplicative: M) -> Self {
        Self {
            additive,
            multiplicative,
        }
    }

    /// The additive inverse `-a`.
    #[inline]
    pub fn neg(&self, a: &A::Elem) -> A::Elem {
        self.additive.inverse(a)
    }
}

impl_two_operation_structure!(Ring, CommutativeGroup, Monoid);

/// A commutative ring: a [`Ring`] whose multiplication is commutative.
///
/// Left distributivity implies right distributivity here and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommutativeRing<A, M> {
    additive: A,
    multiplicative: M,
}

impl<A, M> CommutativeRing<A, M>
where
    A: CommutativeGroup,
    M: CommutativeMonoid + Magma<Elem = <A as Magma>::Elem>,
{
    /// Combine an additive commutative group with a multiplicative
    /// commutative monoid.
    pub fn new(additive: A, multiplicative: M) -> Self {
        Self {
            additive,
            multiplicative,
        }
    }

    /// The additive inverse `-a`.
    #[inline]
    pub fn neg(&self, a: &A::Elem) -> A::Elem {
        self.additive.inverse(a)
    }
}

impl_two_operation_structure!(CommutativeRing, CommutativeGroup, CommutativeMonoid);

/// A field `(T, +, ·)`.
///
/// `(T, +)` is a commutative group with identity `0`, and `(T*, ·)` with
/// `T* = {a ∈ T | a ≠ 0}` is a commutative group with identity `1`. The
/// multiplicative group is supplied over all of `T`; its inverse is only
/// consulted for non-zero elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<A, M> {
    additive: A,
    multiplicative: M,
}

impl<A, M> Field<A, M>
where
    A: CommutativeGroup,
    M: CommutativeGroup + Magma<Elem = <A as Magma>::Elem>,
{
    /// Combine two commutative groups into a field.
    ///
    /// Fails with [`AlgebraError::DegenerateField`] if the additive identity
    /// equals the multiplicative identity.
    pub fn new(additive: A, multiplicative: M) -> Result<Self> {
        let zero = additive.identity();
        if zero == multiplicative.identity() {
            return Err(AlgebraError::DegenerateField {
                identity: format!("{zero:?}"),
            });
        }
        Ok(Self {
            additive,
            multiplicative,
        })
    }

    /// The additive inverse `-a`.
    #[inline]
    pub fn neg(&self, a: &A::Elem) -> A::Elem {
        self.additive.inverse(a)
    }

    /// The multiplicative inverse `a⁻¹`. Undefined for `a = 0`.
    #[inline]
    pub fn recip(&self, a: &A::Elem) -> A::Elem {
        self.multiplicative.inverse(a)
    }
}

impl_two_operation_structure!(Field, CommutativeGroup, CommutativeGroup);
