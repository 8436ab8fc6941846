//! The single-operation structure lattice.
//!
//! | Structure | Capabilities |
//! |-----------|--------------|
//! | [`Semigroup`] | [`Magma`] + [`Associative`] |
//! | [`CommutativeSemigroup`] | [`Semigroup`] + [`Commutative`] |
//! | [`Monoid`] | [`Semigroup`] + [`Identity`] |
//! | [`CommutativeMonoid`] | [`Monoid`] + [`Commutative`] |
//! | [`Group`] | [`Monoid`] + [`Inverse`] |
//! | [`CommutativeGroup`] | [`Group`] + [`Commutative`] |
//!
//! The lattice traits are blanket-implemented: any type carrying the right
//! capabilities is automatically the corresponding structure. The `Fn*`
//! types build instances from closures, and [`Commuting`] adds the
//! commutativity capability to any of them.

use crate::operation::Magma;
use crate::properties::{Associative, Commutative, Identity, Inverse};
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Magma whose operation is associative.
pub trait Semigroup: Associative {}

impl<S: Associative + ?Sized> Semigroup for S {}

/// Semigroup whose operation is also commutative. Also known as an abelian
/// semigroup.
pub trait CommutativeSemigroup: Semigroup + Commutative {}

impl<S: Semigroup + Commutative + ?Sized> CommutativeSemigroup for S {}

/// Semigroup with an identity element.
pub trait Monoid: Semigroup + Identity {}

impl<S: Semigroup + Identity + ?Sized> Monoid for S {}

/// Monoid whose operation is also commutative.
pub trait CommutativeMonoid: Monoid + Commutative {}

impl<S: Monoid + Commutative + ?Sized> CommutativeMonoid for S {}

/// Monoid in which every element has an inverse.
pub trait Group: Monoid + Inverse {}

impl<S: Monoid + Inverse + ?Sized> Group for S {}

/// Group whose operation is also commutative. Also known as an abelian
/// group.
pub trait CommutativeGroup: Group + Commutative {}

impl<S: Group + Commutative + ?Sized> CommutativeGroup for S {}

/// A semigroup `(T, op)` built from a closure.
///
/// The closure is trusted to be associative; use
/// [`Associative::is_associative`] to sample it.
#[derive(Clone, Copy)]
pub struct FnSemigroup<T, F> {
    op: F,
    _elem: PhantomData<fn() -> T>,
}

impl<T, F> FnSemigroup<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    /// Create a semigroup from its operation.
    pub fn new(op: F) -> Self {
        Self {
            op,
            _elem: PhantomData,
        }
    }
}

impl<T, F> Magma for FnSemigroup<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        (self.op)(lhs, rhs)
    }
}

impl<T, F> Associative for FnSemigroup<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
}

/// A monoid `(T, op, e)` built from a closure and its identity element.
#[derive(Clone, Copy)]
pub struct FnMonoid<T, F> {
    op: F,
    identity: T,
}

impl<T, F> FnMonoid<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    /// Create a monoid from its operation and identity.
    pub fn new(op: F, identity: T) -> Self {
        Self { op, identity }
    }
}

impl<T, F> Magma for FnMonoid<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        (self.op)(lhs, rhs)
    }
}

impl<T, F> Associative for FnMonoid<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
}

impl<T, F> Identity for FnMonoid<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    #[inline(always)]
    fn identity(&self) -> T {
        self.identity.clone()
    }
}

/// A group `(T, op, e, ′)` built from closures for the operation and the
/// inverse, plus the identity element.
#[derive(Clone, Copy)]
pub struct FnGroup<T, F, I> {
    op: F,
    identity: T,
    inverse: I,
}

impl<T, F, I> FnGroup<T, F, I>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
    /// Create a group from its operation, identity and inverse.
    pub fn new(op: F, identity: T, inverse: I) -> Self {
        Self {
            op,
            identity,
            inverse,
        }
    }
}

impl<T, F, I> Magma for FnGroup<T, F, I>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
    type Elem = T;

    #[inline(always)]
    fn op(&self, lhs: &T, rhs: &T) -> T {
        (self.op)(lhs, rhs)
    }
}

impl<T, F, I> Associative for FnGroup<T, F, I>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
}

impl<T, F, I> Identity for FnGroup<T, F, I>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
    #[inline(always)]
    fn identity(&self) -> T {
        self.identity.clone()
    }
}

impl<T, F, I> Inverse for FnGroup<T, F, I>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
    #[inline(always)]
    fn inverse(&self, a: &T) -> T {
        (self.inverse)(a)
    }
}

impl<T, F> Debug for FnSemigroup<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSemigroup")
    }
}

impl<T: Debug, F> Debug for FnMonoid<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl<T: Debug, F, I> Debug for FnGroup<T, F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGroup")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Adds the [`Commutative`] capability to a structure, forwarding every
/// other capability it already has.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Commuting<S>(pub S);

impl<S: Magma> Commuting<S> {
    /// Declare `inner`'s operation commutative.
    #[inline(always)]
    pub fn new(inner: S) -> Self {
        Self(inner)
    }

    /// The wrapped structure.
    #[inline(always)]
    pub fn inner(&self) -> &S {
        &self.0
    }
}

impl<S: Magma> Magma for Commuting<S> {
    type Elem = S::Elem;

    #[inline(always)]
    fn op(&self, lhs: &S::Elem, rhs: &S::Elem) -> S::Elem {
        self.0.op(lhs, rhs)
    }
}

impl<S: Magma> Commutative for Commuting<S> {}

impl<S: Associative> Associative for Commuting<S> {}

impl<S: Identity> Identity for Commuting<S> {
    #[inline(always)]
    fn identity(&self) -> S::Elem {
        self.0.identity()
    }
}

impl<S: Inverse> Inverse for Commuting<S> {
    #[inline(always)]
    fn inverse(&self, a: &S::Elem) -> S::Elem {
        self.0.inverse(a)
    }
}

impl<S: Debug> Debug for Commuting<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commuting({:?})", self.0)
    }
}

/// Commutative semigroup built from a closure.
pub type FnCommutativeSemigroup<T, F> = Commuting<FnSemigroup<T, F>>;

/// Commutative monoid built from a closure.
pub type FnCommutativeMonoid<T, F> = Commuting<FnMonoid<T, F>>;

/// Commutative (abelian) group built from closures.
pub type FnCommutativeGroup<T, F, I> = Commuting<FnGroup<T, F, I>>;

impl<T, F> FnSemigroup<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    /// Declare the operation commutative.
    pub fn commuting(self) -> FnCommutativeSemigroup<T, F> {
        Commuting(self)
    }
}

impl<T, F> FnMonoid<T, F>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
{
    /// Declare the operation commutative.
    pub fn commuting(self) -> FnCommutativeMonoid<T, F> {
        Commuting(self)
    }
}

impl<T, F, I> FnGroup<T, F, I>
where
    T: Clone + PartialEq + Debug,
    F: Fn(&T, &T) -> T,
    I: Fn(&T) -> T,
{
    /// Declare the operation commutative.
    pub fn commuting(self) -> FnCommutativeGroup<T, F, I> {
        Commuting(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    fn counting(step: i32) -> impl FnMut() -> i32 {
        let mut i = 0;
        move || {
            i += step;
            i
        }
    }

    fn assert_semigroup<S: Semigroup>(_: &S) {}
    fn assert_commutative_monoid<S: CommutativeMonoid>(_: &S) {}
    fn assert_commutative_group<S: CommutativeGroup>(_: &S) {}

    #[test]
    fn test_int_semigroup() {
        let semigroup = FnSemigroup::new(|a: &i32, b: &i32| a + b);
        assert_semigroup(&semigroup);
        assert!(semigroup.is_associative(&mut counting(10)));
    }

    #[test]
    fn test_int_commutative_semigroup() {
        let semigroup = FnSemigroup::new(|a: &i32, b: &i32| a * b).commuting();
        assert!(semigroup.is_associative(&mut counting(2)));
        assert!(semigroup.is_commutative(&mut counting(3)));
    }

    #[test]
    fn test_real_monoid() {
        let monoid = FnMonoid::new(|a: &f64, b: &f64| a * b, 1.0);
        let mut i = 0.0;
        let mut gen = || {
            i += 2.0;
            i
        };
        assert!(monoid.is_associative(&mut gen));
        assert!(monoid.is_identity(&mut gen));
        assert_eq!(monoid.identity(), 1.0);
    }

    #[test]
    fn test_int_commutative_monoid() {
        let monoid = FnMonoid::new(|a: &i32, b: &i32| a * b, 1).commuting();
        assert_commutative_monoid(&monoid);
        let mut gen = counting(2);
        assert!(monoid.is_associative(&mut gen));
        assert!(monoid.is_identity(&mut gen));
        assert!(monoid.is_commutative(&mut gen));
    }

    #[test]
    fn test_int_group() {
        let group = FnGroup::new(|a: &i32, b: &i32| a + b, 0, |a: &i32| -a);
        let mut gen = counting(3);
        assert!(group.is_associative(&mut gen));
        assert!(group.is_identity(&mut gen));
        assert!(group.is_inverse(&mut gen));
        assert_eq!(group.inverse(&9), -9);
    }

    #[test]
    fn test_int_commutative_group() {
        let group = FnGroup::new(|a: &i32, b: &i32| a + b, 0, |a: &i32| -a).commuting();
        assert_commutative_group(&group);
        let mut gen = counting(3);
        assert!(group.is_associative(&mut gen));
        assert!(group.is_commutative(&mut gen));
        assert!(group.is_inverse(&mut gen));
    }

    #[test]
    fn test_wrong_identity_is_refuted() {
        let monoid = FnMonoid::new(|a: &i32, b: &i32| a + b, 1);
        assert!(!monoid.is_identity(&mut counting(1)));
    }

    #[test]
    fn test_wrong_inverse_is_refuted() {
        let group = FnGroup::new(|a: &i32, b: &i32| a + b, 0, |a: &i32| *a);
        assert!(!group.is_inverse(&mut counting(1)));
    }

    #[test]
    fn test_debug() {
        let group = FnGroup::new(|a: &i32, b: &i32| a + b, 0, |a: &i32| -a).commuting();
        assert_eq!(format!("{group:?}"), "Commuting(FnGroup { identity: 0, .. })");
        let semigroup = FnSemigroup::new(|a: &i32, b: &i32| a + b);
        assert_eq!(format!("{semigroup:?}"), "FnSemigroup");
    }

    #[test]
    fn test_commuting_forwards() {
        let inner = FnMonoid::new(|a: &i32, b: &i32| a.max(b).to_owned(), i32::MIN);
        let monoid = Commuting::new(inner);
        assert_eq!(monoid.op(&3, &9), 9);
        assert_eq!(monoid.identity(), i32::MIN);
        assert_eq!(monoid.inner().identity(), i32::MIN);
    }

    #[quickcheck]
    fn integer_addition_is_a_commutative_group(a: i32, b: i32, c: i32) -> bool {
        let group = FnGroup::new(|x: &i64, y: &i64| x + y, 0, |x: &i64| -x).commuting();
        let values = [a as i64, b as i64, c as i64];
        let mut next = 0;
        let mut gen = || {
            let v = values[next % values.len()];
            next += 1;
            v
        };
        group.is_associative(&mut gen)
            && group.is_commutative(&mut gen)
            && group.is_identity(&mut gen)
            && group.is_inverse(&mut gen)
    }

    #[quickcheck]
    fn integer_multiplication_identity(a: i32) -> bool {
        let monoid = FnMonoid::new(|x: &i64, y: &i64| x * y, 1).commuting();
        let mut gen = || a as i64;
        monoid.is_identity(&mut gen)
    }
}
