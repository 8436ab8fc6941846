use std::fmt::Debug;
use std::marker::PhantomData;

/// A binary function `T × T → R` that is not required to be closed over `T`.
///
/// If the function is undefined for some operands it is a partial
/// operation. Operands are never validated; callers only hand in values the
/// function is defined on.
pub trait Operation {
    /// Operand type `T`.
    type Operand;

    /// Result type `R`.
    type Output;

    /// Apply the operation.
    fn apply(&self, lhs: &Self::Operand, rhs: &Self::Operand) -> Self::Output;
}

/// A closed binary operation `(T, op)`, also known as a magma.
///
/// `a, b ∈ T` implies `op(a, b) ∈ T`. No further axioms are assumed; the
/// property traits in [`crate::properties`] layer them on.
///
/// Law checks compare results with `PartialEq`, so the element type must
/// provide a meaningful equality.
pub trait Magma {
    /// The carrier set `T`.
    type Elem: Clone + PartialEq + Debug;

    /// The closed operation.
    fn op(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> Self::Elem;
}

impl<M: Magma + ?Sized> Magma for &M {
    type Elem = M::Elem;

    #[inline(always)]
    fn op(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> Self::Elem {
        (**self).op(lhs, rhs)
    }
}

impl<M: Magma> Operation for M {
    type Operand = M::Elem;
    type Output = M::Elem;

    #[inline(always)]
    fn apply(&self, lhs: &M::Elem, rhs: &M::Elem) -> M::Elem {
        self.op(lhs, rhs)
    }
}

/// An [`Operation`] backed by a closure, for functions whose result leaves
/// the operand set (an inner product `ℝⁿ × ℝⁿ → ℝ`, a comparison, ...).
pub struct FnOperation<T, R, F> {
    f: F,
    _marker: PhantomData<fn(&T, &T) -> R>,
}

impl<T, R, F> FnOperation<T, R, F>
where
    F: Fn(&T, &T) -> R,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, R, F> Operation for FnOperation<T, R, F>
where
    F: Fn(&T, &T) -> R,
{
    type Operand = T;
    type Output = R;

    #[inline(always)]
    fn apply(&self, lhs: &T, rhs: &T) -> R {
        (self.f)(lhs, rhs)
    }
}
