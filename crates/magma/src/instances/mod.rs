//! Concrete structures over native numeric and boolean types.
//!
//! | Type | Carrier | Operation | Identity | Inverse |
//! |------|---------|-----------|----------|---------|
//! | [`Addition<T>`] | any `num::Num` | + | 0 | `-a` for signed `T` |
//! | [`Multiplication<T>`] | any `num::Num` | · | 1 | `1/a` for floats |
//! | [`Max<T>`] | floats | max | -∞ | |
//! | [`Min<T>`] | floats | min | +∞ | |
//! | [`Or`] | `bool` | ∨ | false | |
//! | [`And`] | `bool` | ∧ | true | |
//! | [`CountingMax<T>`] | [`Counted<T>`] | max, merge counts | (-∞, 0) | |
//! | [`CountingPlus<T>`] | [`Counted<T>`] | +, multiply counts | (0, 1) | |
//! | [`Coordinates<N>`] | `[f64; N]` | component-wise + | 0 | `-v` |

mod arithmetic;
mod boolean;
mod coordinates;
mod counting;
mod tropical;

pub use arithmetic::{Addition, Multiplication};
pub use boolean::{And, Or};
pub use coordinates::Coordinates;
pub use counting::{Counted, CountingMax, CountingPlus};
pub use tropical::{Max, Min};

/// Integers `(ℤ, +)`.
pub type Integers = Addition<i64>;

/// Naturals `(ℕ, +)`, including zero.
pub type Naturals = Addition<u64>;

/// Reals `(ℝ, +)`.
pub type Reals = Addition<f64>;
