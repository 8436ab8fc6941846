//! Abstract algebra structures with sampled law checks.
//!
//! This crate re-exports the trait hierarchy of `magma-types` and adds the
//! pieces needed to use it: concrete structures over native numeric types,
//! value generators, multi-round verification and vector spaces.
//!
//! # Structures
//!
//! | Instance | Structure | Carrier |
//! |----------|-----------|---------|
//! | [`Addition<i64>`](instances::Addition) | commutative group | ℤ |
//! | [`Addition<u64>`](instances::Addition) | commutative monoid | ℕ |
//! | [`Multiplication<f64>`](instances::Multiplication) | commutative group on ℝ \ {0} | ℝ |
//! | [`Max<T>`](instances::Max), [`Min<T>`](instances::Min) | commutative monoid | floats |
//! | [`Or`](instances::Or), [`And`](instances::And) | commutative monoid | `bool` |
//! | [`Coordinates<N>`](instances::Coordinates) | commutative group | `[f64; N]` |
//!
//! Two structures on the same carrier combine into a [`SemiRing`], [`Ring`],
//! [`CommutativeRing`] or [`Field`]:
//!
//! | Combination | Result |
//! |-------------|--------|
//! | `SemiRing::new(Addition::<u64>::new(), Multiplication::<u64>::new())` | natural numbers |
//! | `CommutativeRing::new(Addition::<i64>::new(), Multiplication::<i64>::new())` | integers |
//! | `Field::new(Addition::<f64>::new(), Multiplication::<f64>::new())?` | reals |
//! | `SemiRing::new(Max::<f64>::new(), Addition::<f64>::new())` | max-plus tropical |
//! | `SemiRing::new(Or, And)` | Boolean |
//!
//! # Quick Start
//!
//! ```
//! use magma::prelude::*;
//!
//! let integers = Addition::<i64>::new();
//! let mut gen = Stepping::new(0, 3);
//!
//! assert!(integers.is_associative(&mut gen));
//! assert!(integers.is_commutative(&mut gen));
//! assert!(integers.is_inverse(&mut gen));
//!
//! let naturals = SemiRing::new(Addition::<u32>::new(), Multiplication::<u32>::new());
//! assert!(naturals.does_zero_annihilate(&7));
//! assert!(naturals.is_left_distributive(&mut Stepping::new(0u32, 1)));
//! ```
//!
//! # Verification
//!
//! ```
//! use magma::prelude::*;
//!
//! let reals = Field::new(Addition::<f64>::new(), Multiplication::<f64>::new())?;
//! let report = Verifier::new()
//!     .rounds(4)
//!     .verify_field(&reals, &mut Cycle::new(vec![0.5, 2.0, -4.0, 8.0]));
//!
//! println!("{report}");
//! assert!(report.holds());
//! # Ok::<(), magma::AlgebraError>(())
//! ```
//!
//! Set `RUST_LOG=trace` with a logger installed to see both sides of every
//! comparison.

pub mod generators;
pub mod instances;
pub mod vector_space;
pub mod verify;

pub use magma_types::*;

pub use generators::{Cycle, Seeded, Stepping};
pub use instances::{
    Addition, And, Coordinates, Counted, CountingMax, CountingPlus, Max, Min, Multiplication, Or,
};
pub use vector_space::VectorSpace;
pub use verify::{Component, ComponentReport, LawReport, LawTally, Verifier};

/// Max-plus tropical semiring `(ℝ ∪ {-∞}, max, +)`.
pub type MaxPlus<T> = SemiRing<Max<T>, Addition<T>>;
/// Min-plus tropical semiring `(ℝ ∪ {+∞}, min, +)`.
pub type MinPlus<T> = SemiRing<Min<T>, Addition<T>>;
/// Boolean semiring `({false, true}, ∨, ∧)`.
pub type Boolean = SemiRing<Or, And>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        Addition, And, Associative, Boolean, Commutative, CommutativeGroup, CommutativeMonoid,
        CommutativeRing, CommutativeSemigroup, Coordinates, Counted, CountingMax, CountingPlus,
        Cycle, Distributive, DistributivePair, Field, FnGroup, FnMonoid, FnSemigroup, Generator,
        Group, Identity, Inverse, Law, LawReport, Magma, Max, MaxPlus, Min, MinPlus, Monoid,
        Multiplication, Or, Recorder, Ring, Seeded, SemiRing, Semigroup, Stepping, VectorSpace,
        Verifier,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use test_log::test;

    #[test]
    fn test_semiring_aliases() {
        let max_plus: MaxPlus<f64> = SemiRing::new(Max::new(), Addition::new());
        assert_eq!(max_plus.zero(), f64::NEG_INFINITY);
        assert_eq!(max_plus.one(), 0.0);

        let min_plus: MinPlus<f32> = SemiRing::new(Min::new(), Addition::new());
        assert_eq!(min_plus.mul(&1.5, &2.0), 3.5);

        let boolean: Boolean = SemiRing::new(Or, And);
        assert!(!boolean.zero());
        assert!(boolean.one());
    }

    #[test]
    fn test_prelude_composes() {
        let integers = CommutativeRing::new(Addition::<i64>::new(), Multiplication::<i64>::new());
        assert_eq!(integers.neg(&5), -5);
        let report =
            Verifier::new().verify_commutative_ring(&integers, &mut Stepping::new(-20, 7));
        assert!(report.holds());
    }

    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    #[test]
    fn test_structures_are_send_sync() {
        let closures = FnGroup::new(|a: &i64, b: &i64| a + b, 0, |a: &i64| -a);
        assert_send_sync(&closures);
        assert_send_sync(&closures.commuting());
        assert_send_sync(&Addition::<i64>::new());

        let boolean: Boolean = SemiRing::new(Or, And);
        assert_send_sync(&boolean);

        let reals = Field::new(Addition::<f64>::new(), Multiplication::<f64>::new())
            .expect("0 and 1 differ");
        assert_send_sync(&reals);

        let plane = VectorSpace::new(Coordinates::<2>::new(), reals, |x: &f64, v: &[f64; 2]| {
            v.map(|c| x * c)
        });
        assert_send_sync(&plane);
        assert_send_sync(&Seeded::new(0i64..=10));
        assert_send_sync(&LawReport::new());
    }

    #[test]
    fn test_shared_structure_across_threads() {
        let integers = Addition::<i64>::new();
        let reports: Vec<LawReport> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4u64)
                .map(|seed| {
                    let integers = &integers;
                    scope.spawn(move || {
                        let mut gen = Seeded::new(-1_000i64..=1_000).seed(seed);
                        Verifier::new().rounds(16).verify_group(integers, &mut gen)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("verifier thread panicked"))
                .collect()
        });

        assert_eq!(reports.len(), 4);
        for report in &reports {
            assert!(report.holds());
            assert_eq!(report.tally(Law::Associativity).passed, 16);
        }
    }
}
