//! Vector spaces over a field.

use magma_types::{settle, CommutativeGroup, Field, Generator, Law, Magma, Observer, Silent};
use std::fmt;

/// A vector space: a commutative group of vectors `(V, +)`, a [`Field`] of
/// scalars and a scalar multiplication `F × V → V`.
///
/// The checks draw scalars and vectors from separate generators; scalars
/// are always drawn before vectors.
pub struct VectorSpace<G, A, M, S> {
    vectors: G,
    scalars: Field<A, M>,
    scale: S,
}

impl<G, A, M, S> VectorSpace<G, A, M, S>
where
    G: CommutativeGroup,
    A: CommutativeGroup,
    M: CommutativeGroup + Magma<Elem = A::Elem>,
    S: Fn(&A::Elem, &G::Elem) -> G::Elem,
{
    /// Combine a vector group, a scalar field and a scalar multiplication.
    pub fn new(vectors: G, scalars: Field<A, M>, scale: S) -> Self {
        Self {
            vectors,
            scalars,
            scale,
        }
    }

    /// The group of vectors.
    pub fn vectors(&self) -> &G {
        &self.vectors
    }

    /// The field of scalars.
    pub fn scalars(&self) -> &Field<A, M> {
        &self.scalars
    }

    /// `x · v`
    #[inline]
    pub fn scale(&self, x: &A::Elem, v: &G::Elem) -> G::Elem {
        (self.scale)(x, v)
    }

    /// `u + w`
    #[inline]
    pub fn add(&self, u: &G::Elem, w: &G::Elem) -> G::Elem {
        self.vectors.op(u, w)
    }

    /// Sample `1 · v = v`.
    pub fn is_scalar_identity<V>(&self, vectors: &mut V) -> bool
    where
        V: Generator<G::Elem> + ?Sized,
    {
        self.is_scalar_identity_traced(vectors, &mut Silent)
    }

    /// [`VectorSpace::is_scalar_identity`], reporting both sides to
    /// `observer`.
    pub fn is_scalar_identity_traced<V, O>(&self, vectors: &mut V, observer: &mut O) -> bool
    where
        V: Generator<G::Elem> + ?Sized,
        O: Observer<G::Elem> + ?Sized,
    {
        let v = vectors.generate();
        let lhs = self.scale(&self.scalars.one(), &v);
        settle(Law::ScalarIdentity, lhs, v, observer)
    }

    /// Sample `x · (y · v) = (x · y) · v`.
    pub fn is_scalar_compatible<X, V>(&self, scalars: &mut X, vectors: &mut V) -> bool
    where
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
    {
        self.is_scalar_compatible_traced(scalars, vectors, &mut Silent)
    }

    /// [`VectorSpace::is_scalar_compatible`], reporting both sides to
    /// `observer`.
    pub fn is_scalar_compatible_traced<X, V, O>(
        &self,
        scalars: &mut X,
        vectors: &mut V,
        observer: &mut O,
    ) -> bool
    where
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
        O: Observer<G::Elem> + ?Sized,
    {
        let x = scalars.generate();
        let y = scalars.generate();
        let v = vectors.generate();
        let lhs = self.scale(&x, &self.scale(&y, &v));
        let rhs = self.scale(&self.scalars.mul(&x, &y), &v);
        settle(Law::ScalarCompatibility, lhs, rhs, observer)
    }

    /// Sample `x · (u + w) = x · u + x · w`.
    pub fn is_vector_distributive<X, V>(&self, scalars: &mut X, vectors: &mut V) -> bool
    where
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
    {
        self.is_vector_distributive_traced(scalars, vectors, &mut Silent)
    }

    /// [`VectorSpace::is_vector_distributive`], reporting both sides to
    /// `observer`.
    pub fn is_vector_distributive_traced<X, V, O>(
        &self,
        scalars: &mut X,
        vectors: &mut V,
        observer: &mut O,
    ) -> bool
    where
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
        O: Observer<G::Elem> + ?Sized,
    {
        let x = scalars.generate();
        let u = vectors.generate();
        let w = vectors.generate();
        let lhs = self.scale(&x, &self.add(&u, &w));
        let rhs = self.add(&self.scale(&x, &u), &self.scale(&x, &w));
        settle(Law::VectorDistributivity, lhs, rhs, observer)
    }

    /// Sample `(x + y) · v = x · v + y · v`.
    pub fn is_scalar_distributive<X, V>(&self, scalars: &mut X, vectors: &mut V) -> bool
    where
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
    {
        self.is_scalar_distributive_traced(scalars, vectors, &mut Silent)
    }

    /// [`VectorSpace::is_scalar_distributive`], reporting both sides to
    /// `observer`.
    pub fn is_scalar_distributive_traced<X, V, O>(
        &self,
        scalars: &mut X,
        vectors: &mut V,
        observer: &mut O,
    ) -> bool
    where
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
        O: Observer<G::Elem> + ?Sized,
    {
        let x = scalars.generate();
        let y = scalars.generate();
        let v = vectors.generate();
        let lhs = self.scale(&self.scalars.add(&x, &y), &v);
        let rhs = self.add(&self.scale(&x, &v), &self.scale(&y, &v));
        settle(Law::ScalarDistributivity, lhs, rhs, observer)
    }
}

impl<G: fmt::Debug, A: fmt::Debug, M: fmt::Debug, S> fmt::Debug for VectorSpace<G, A, M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorSpace")
            .field("vectors", &self.vectors)
            .field("scalars", &self.scalars)
            .finish_non_exhaustive()
    }
}
