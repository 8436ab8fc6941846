use magma_types::{Associative, Commutative, Identity, Magma};

/// Logical disjunction `(bool, ∨, false)`: a commutative monoid.
///
/// With [`And`] as multiplication it forms the Boolean semiring used for
/// graph reachability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Or;

impl Magma for Or {
    type Elem = bool;

    #[inline(always)]
    fn op(&self, lhs: &bool, rhs: &bool) -> bool {
        *lhs || *rhs
    }
}

impl Associative for Or {}

impl Commutative for Or {}

impl Identity for Or {
    #[inline(always)]
    fn identity(&self) -> bool {
        false
    }
}

/// Logical conjunction `(bool, ∧, true)`: a commutative monoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct And;

impl Magma for And {
    type Elem = bool;

    #[inline(always)]
    fn op(&self, lhs: &bool, rhs: &bool) -> bool {
        *lhs && *rhs
    }
}

impl Associative for And {}

impl Commutative for And {}

impl Identity for And {
    #[inline(always)]
    fn identity(&self) -> bool {
        true
    }
}
