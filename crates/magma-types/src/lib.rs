//! Algebraic structure traits and sampled law checks.
//!
//! This crate provides the capability-based type system for abstract
//! algebra: a closed binary operation ([`Magma`]) plus independent property
//! traits that classify it by the laws it satisfies.
//!
//! # Structures
//!
//! | Structure | Operations | Required laws |
//! |-----------|-----------|---------------|
//! | [`Semigroup`] | ∘ | associative |
//! | [`CommutativeSemigroup`] | ∘ | associative, commutative |
//! | [`Monoid`] | ∘, e | associative, identity |
//! | [`CommutativeMonoid`] | ∘, e | associative, identity, commutative |
//! | [`Group`] | ∘, e, ′ | associative, identity, inverse |
//! | [`CommutativeGroup`] | ∘, e, ′ | associative, identity, inverse, commutative |
//! | [`SemiRing`] | +, · | commutative monoid, monoid, distributive, 0 annihilates |
//! | [`Ring`] | +, · | commutative group, monoid, distributive |
//! | [`CommutativeRing`] | +, · | commutative group, commutative monoid, distributive |
//! | [`Field`] | +, · | two commutative groups, distributive, 0 ≠ 1 |
//!
//! # Sampled Checks
//!
//! Each property trait exposes an `is_*` method that draws values from a
//! caller-supplied [`Generator`] and compares both sides of the law. The
//! checks are samples, not proofs.
//!
//! ```
//! use magma_types::prelude::*;
//!
//! let integers = FnGroup::new(|a: &i64, b: &i64| a + b, 0, |a: &i64| -a).commuting();
//!
//! let mut i = 0;
//! let mut gen = || {
//!     i += 3;
//!     i
//! };
//!
//! assert!(integers.is_associative(&mut gen));
//! assert!(integers.is_commutative(&mut gen));
//! assert!(integers.is_inverse(&mut gen));
//! ```
//!
//! Both sides of every comparison can be observed without affecting the
//! verdict:
//!
//! ```
//! use magma_types::prelude::*;
//!
//! let subtraction = FnSemigroup::new(|a: &i64, b: &i64| a - b);
//! let mut samples = Recorder::new();
//! let mut values = [1, 2, 3].into_iter().cycle();
//!
//! let holds = subtraction.is_associative_traced(&mut || values.next().unwrap(), &mut samples);
//! assert!(!holds);
//! assert_eq!(samples.samples()[0].lhs, -4);
//! ```
//!
//! # Fields
//!
//! ```
//! use magma_types::prelude::*;
//!
//! let add = FnGroup::new(|a: &f64, b: &f64| a + b, 0.0, |a: &f64| -a).commuting();
//! let mul = FnGroup::new(|a: &f64, b: &f64| a * b, 0.0, |a: &f64| 1.0 / a).commuting();
//!
//! // 0 = 1 is rejected at construction time
//! assert!(Field::new(add, mul).is_err());
//! ```

pub mod distributive;
pub mod error;
pub mod generator;
pub mod operation;
pub mod properties;
pub mod ring;
pub mod structures;
pub mod trace;

pub use distributive::{Distributive, DistributivePair, Element};
pub use error::{AlgebraError, Result};
pub use generator::Generator;
pub use operation::{FnOperation, Magma, Operation};
pub use properties::{Associative, Commutative, Identity, Inverse};
pub use ring::{CommutativeRing, Field, Ring, SemiRing};
pub use structures::{
    CommutativeGroup, CommutativeMonoid, CommutativeSemigroup, Commuting, FnCommutativeGroup,
    FnCommutativeMonoid, FnCommutativeSemigroup, FnGroup, FnMonoid, FnSemigroup, Group, Monoid,
    Semigroup,
};
pub use trace::{settle, Law, LawSample, Observer, Recorder, Silent};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        Associative, Commutative, CommutativeGroup, CommutativeMonoid, CommutativeRing,
        CommutativeSemigroup, Commuting, Distributive, DistributivePair, Field, FnGroup, FnMonoid,
        FnOperation, FnSemigroup, Generator, Group, Identity, Inverse, Law, LawSample, Magma,
        Monoid, Observer, Operation, Recorder, Ring, SemiRing, Semigroup, Silent,
    };
}
