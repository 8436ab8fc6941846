use magma_types::{Associative, Commutative, Identity, Inverse, Magma};

/// `ℝⁿ` under component-wise addition: a commutative group with identity
/// `[0.0; N]` and inverse `-v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coordinates<const N: usize>;

impl<const N: usize> Coordinates<N> {
    /// Create the additive group on `[f64; N]`.
    pub const fn new() -> Self {
        Self
    }
}

impl<const N: usize> Magma for Coordinates<N> {
    type Elem = [f64; N];

    #[inline]
    fn op(&self, lhs: &[f64; N], rhs: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| lhs[i] + rhs[i])
    }
}

impl<const N: usize> Associative for Coordinates<N> {}

impl<const N: usize> Commutative for Coordinates<N> {}

impl<const N: usize> Identity for Coordinates<N> {
    #[inline]
    fn identity(&self) -> [f64; N] {
        [0.0; N]
    }
}

impl<const N: usize> Inverse for Coordinates<N> {
    #[inline]
    fn inverse(&self, a: &[f64; N]) -> [f64; N] {
        a.map(|x| -x)
    }
}
