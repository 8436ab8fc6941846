//! Multi-round law verification.
//!
//! A single `is_*` call samples a law once. [`Verifier`] repeats the checks
//! that define a structure and tallies every comparison in a [`LawReport`],
//! keyed by the [`Component`] the law was sampled on.
//!
//! ```
//! use magma::generators::Stepping;
//! use magma::instances::Addition;
//! use magma::verify::Verifier;
//! use magma::Law;
//!
//! let report = Verifier::new()
//!     .rounds(16)
//!     .verify_group(&Addition::<i64>::new(), &mut Stepping::new(0, 3));
//!
//! assert!(report.holds());
//! assert_eq!(report.tally(Law::Associativity).passed, 16);
//! ```

use crate::vector_space::VectorSpace;
use magma_types::{
    settle, Commutative, CommutativeGroup, CommutativeMonoid, CommutativeRing, Distributive,
    Field, Generator, Group, Law, LawSample, Magma, Monoid, Observer, Ring, SemiRing, Semigroup,
};
use std::collections::BTreeMap;
use std::fmt;

/// Rounds run by [`Verifier::new`].
pub const DEFAULT_ROUNDS: usize = 8;

/// The part of a structure a law was sampled on.
///
/// Single-operation structures and laws that involve both operations
/// (distributivity, annihilation, the vector space axioms) are recorded
/// under [`Component::Whole`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    /// The structure as a whole.
    #[default]
    Whole,
    /// The `+` structure of a semiring, ring or field.
    Additive,
    /// The `·` structure of a semiring, ring or field.
    Multiplicative,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Whole => "whole",
            Component::Additive => "additive",
            Component::Multiplicative => "multiplicative",
        })
    }
}

/// Pass/fail counts for one law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LawTally {
    /// Samples where both sides agreed.
    pub passed: usize,
    /// Samples where the sides differed.
    pub failed: usize,
}

impl LawTally {
    /// Number of samples taken.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Per-law tallies collected over one verification run.
///
/// A report is also an [`Observer`], so it can be handed directly to the
/// `*_traced` checks; samples observed that way count towards
/// [`Component::Whole`]. Use [`LawReport::component`] to record under a
/// specific component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LawReport {
    tallies: BTreeMap<(Component, Law), LawTally>,
}

impl LawReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sample of `law` on the whole structure.
    pub fn record(&mut self, law: Law, holds: bool) {
        self.record_for(Component::Whole, law, holds);
    }

    /// Count one sample of `law` on `component`.
    pub fn record_for(&mut self, component: Component, law: Law, holds: bool) {
        let tally = self.tallies.entry((component, law)).or_default();
        if holds {
            tally.passed += 1;
        } else {
            tally.failed += 1;
        }
    }

    /// Observer recording every sample under `component`.
    pub fn component(&mut self, component: Component) -> ComponentReport<'_> {
        ComponentReport {
            report: self,
            component,
        }
    }

    /// Tally for `law`, summed over every component.
    pub fn tally(&self, law: Law) -> LawTally {
        self.tallies
            .iter()
            .filter(|((_, l), _)| *l == law)
            .fold(LawTally::default(), |sum, (_, tally)| LawTally {
                passed: sum.passed + tally.passed,
                failed: sum.failed + tally.failed,
            })
    }

    /// Tally for `law` on `component`; zero if it was never sampled there.
    pub fn tally_of(&self, component: Component, law: Law) -> LawTally {
        self.tallies
            .get(&(component, law))
            .copied()
            .unwrap_or_default()
    }

    /// Sampled `(component, law)` pairs, ordered by component then law.
    pub fn laws(&self) -> impl Iterator<Item = (Component, Law)> + '_ {
        self.tallies.keys().copied()
    }

    /// `(component, law)` pairs with at least one failing sample.
    pub fn failures(&self) -> impl Iterator<Item = (Component, Law)> + '_ {
        self.tallies
            .iter()
            .filter(|(_, tally)| tally.failed > 0)
            .map(|(key, _)| *key)
    }

    /// `true` iff every sample of every law held.
    pub fn holds(&self) -> bool {
        self.tallies.values().all(|tally| tally.failed == 0)
    }

    /// Whether every sample of `law` held on every component. Unsampled laws
    /// count as holding.
    pub fn law_holds(&self, law: Law) -> bool {
        self.tally(law).failed == 0
    }

    /// Total number of comparisons made.
    pub fn samples(&self) -> usize {
        self.tallies.values().map(LawTally::total).sum()
    }
}

impl<T: PartialEq> Observer<T> for LawReport {
    fn observe(&mut self, sample: &LawSample<T>) {
        self.record(sample.law, sample.holds());
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.holds() { "holds" } else { "fails" };
        write!(f, "{verdict} ({} samples)", self.samples())?;
        for ((component, law), tally) in &self.tallies {
            match component {
                Component::Whole => write!(f, "\n  {law}")?,
                _ => write!(f, "\n  {component} {law}")?,
            }
            write!(f, ": {}/{} held", tally.passed, tally.total())?;
        }
        Ok(())
    }
}

/// A [`LawReport`] borrowed to record under one [`Component`].
#[derive(Debug)]
pub struct ComponentReport<'a> {
    report: &'a mut LawReport,
    component: Component,
}

impl<T: PartialEq> Observer<T> for ComponentReport<'_> {
    fn observe(&mut self, sample: &LawSample<T>) {
        self.report
            .record_for(self.component, sample.law, sample.holds());
    }
}

/// Repeats the sampled checks of a structure.
///
/// # Example
///
/// ```
/// use magma::generators::Seeded;
/// use magma::instances::{Addition, Multiplication};
/// use magma::verify::Verifier;
/// use magma::SemiRing;
///
/// let naturals = SemiRing::new(Addition::<u64>::new(), Multiplication::<u64>::new());
/// let report = Verifier::new()
///     .rounds(32)
///     .verify_semiring(&naturals, &mut Seeded::new(0u64..=1_000).seed(1));
/// assert!(report.holds());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verifier {
    rounds: usize,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Verifier {
    /// Verifier running [`DEFAULT_ROUNDS`] rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds. At least one round is always run.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    /// Configured number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds
    }

    fn run<F>(&self, structure: &str, mut round: F) -> LawReport
    where
        F: FnMut(&mut LawReport) -> bool,
    {
        let mut report = LawReport::new();
        for i in 0..self.rounds {
            if !round(&mut report) {
                log::warn!("{structure}: round {}/{} failed", i + 1, self.rounds);
            }
        }
        log::debug!("{structure}: {report}");
        report
    }

    /// Associativity.
    pub fn verify_semigroup<S, G>(&self, semigroup: &S, generator: &mut G) -> LawReport
    where
        S: Semigroup + ?Sized,
        G: Generator<S::Elem> + ?Sized,
    {
        self.run("semigroup", |report| {
            semigroup.is_associative_traced(&mut *generator, report)
        })
    }

    /// Commutativity alone.
    pub fn verify_commutative<S, G>(&self, magma: &S, generator: &mut G) -> LawReport
    where
        S: Commutative + ?Sized,
        G: Generator<S::Elem> + ?Sized,
    {
        self.run("commutative magma", |report| {
            magma.is_commutative_traced(&mut *generator, report)
        })
    }

    /// Associativity and both identity laws.
    pub fn verify_monoid<S, G>(&self, monoid: &S, generator: &mut G) -> LawReport
    where
        S: Monoid + ?Sized,
        G: Generator<S::Elem> + ?Sized,
    {
        self.run("monoid", |report| {
            monoid_round(monoid, &mut *generator, report)
        })
    }

    /// Monoid laws plus both inverse laws.
    pub fn verify_group<S, G>(&self, group: &S, generator: &mut G) -> LawReport
    where
        S: Group + ?Sized,
        G: Generator<S::Elem> + ?Sized,
    {
        self.run("group", |report| group_round(group, &mut *generator, report))
    }

    /// Left and right distributivity.
    pub fn verify_distributive<D, G>(&self, pair: &D, generator: &mut G) -> LawReport
    where
        D: Distributive + ?Sized,
        G: Generator<<D::Additive as Magma>::Elem> + ?Sized,
    {
        self.run("distributive pair", |report| {
            distributive_round(pair, &mut *generator, report)
        })
    }

    /// Commutative monoid `+`, monoid `·`, distributivity and zero
    /// annihilation.
    pub fn verify_semiring<A, M, G>(
        &self,
        semiring: &SemiRing<A, M>,
        generator: &mut G,
    ) -> LawReport
    where
        A: CommutativeMonoid,
        M: Monoid + Magma<Elem = A::Elem>,
        G: Generator<A::Elem> + ?Sized,
    {
        self.run("semiring", |report| {
            let additive = semiring.additive();
            let mut holds = {
                let mut add = report.component(Component::Additive);
                monoid_round(additive, &mut *generator, &mut add)
                    & additive.is_commutative_traced(&mut *generator, &mut add)
            };
            holds &= monoid_round(
                semiring.multiplicative(),
                &mut *generator,
                &mut report.component(Component::Multiplicative),
            );
            holds &= distributive_round(semiring, &mut *generator, report);
            let a = generator.generate();
            holds & semiring.does_zero_annihilate_traced(&a, report)
        })
    }

    /// Commutative group `+`, monoid `·` and distributivity.
    pub fn verify_ring<A, M, G>(&self, ring: &Ring<A, M>, generator: &mut G) -> LawReport
    where
        A: CommutativeGroup,
        M: Monoid + Magma<Elem = A::Elem>,
        G: Generator<A::Elem> + ?Sized,
    {
        self.run("ring", |report| {
            let mut holds = commutative_group_round(
                ring.additive(),
                &mut *generator,
                &mut report.component(Component::Additive),
            );
            holds &= monoid_round(
                ring.multiplicative(),
                &mut *generator,
                &mut report.component(Component::Multiplicative),
            );
            holds & distributive_round(ring, &mut *generator, report)
        })
    }

    /// Ring laws with a commutative multiplication.
    pub fn verify_commutative_ring<A, M, G>(
        &self,
        ring: &CommutativeRing<A, M>,
        generator: &mut G,
    ) -> LawReport
    where
        A: CommutativeGroup,
        M: CommutativeMonoid + Magma<Elem = A::Elem>,
        G: Generator<A::Elem> + ?Sized,
    {
        self.run("commutative ring", |report| {
            let mut holds = commutative_group_round(
                ring.additive(),
                &mut *generator,
                &mut report.component(Component::Additive),
            );
            holds &= {
                let multiplicative = ring.multiplicative();
                let mut mul = report.component(Component::Multiplicative);
                monoid_round(multiplicative, &mut *generator, &mut mul)
                    & multiplicative.is_commutative_traced(&mut *generator, &mut mul)
            };
            holds & distributive_round(ring, &mut *generator, report)
        })
    }

    /// Commutative ring laws plus multiplicative inverses.
    ///
    /// The multiplicative inverse is only sampled for values different from
    /// `0`; a zero draw skips that comparison.
    pub fn verify_field<A, M, G>(&self, field: &Field<A, M>, generator: &mut G) -> LawReport
    where
        A: CommutativeGroup,
        M: CommutativeGroup + Magma<Elem = A::Elem>,
        G: Generator<A::Elem> + ?Sized,
    {
        self.run("field", |report| {
            let mut holds = commutative_group_round(
                field.additive(),
                &mut *generator,
                &mut report.component(Component::Additive),
            );
            holds &= {
                let mul = field.multiplicative();
                let mut observer = report.component(Component::Multiplicative);
                let mut holds = monoid_round(mul, &mut *generator, &mut observer)
                    & mul.is_commutative_traced(&mut *generator, &mut observer);

                let a = generator.generate();
                if a != field.zero() {
                    let inv = mul.inverse(&a);
                    let (left, right) = (mul.op(&inv, &a), mul.op(&a, &inv));
                    let one = field.one();
                    holds &= settle(Law::LeftInverse, left, one.clone(), &mut observer);
                    holds &= settle(Law::RightInverse, right, one, &mut observer);
                }
                holds
            };
            holds & distributive_round(field, &mut *generator, report)
        })
    }
}

impl Verifier {
    /// The four vector space axioms, drawing scalars from `scalars` and
    /// vectors from `vectors`.
    pub fn verify_vector_space<G, A, M, S, X, V>(
        &self,
        space: &VectorSpace<G, A, M, S>,
        scalars: &mut X,
        vectors: &mut V,
    ) -> LawReport
    where
        G: CommutativeGroup,
        A: CommutativeGroup,
        M: CommutativeGroup + Magma<Elem = A::Elem>,
        S: Fn(&A::Elem, &G::Elem) -> G::Elem,
        X: Generator<A::Elem> + ?Sized,
        V: Generator<G::Elem> + ?Sized,
    {
        self.run("vector space", |report| {
            let mut holds = space.is_scalar_identity_traced(&mut *vectors, report);
            holds &= space.is_scalar_compatible_traced(&mut *scalars, &mut *vectors, report);
            holds &= space.is_vector_distributive_traced(&mut *scalars, &mut *vectors, report);
            holds & space.is_scalar_distributive_traced(&mut *scalars, &mut *vectors, report)
        })
    }
}

fn monoid_round<S, G, O>(monoid: &S, generator: &mut G, observer: &mut O) -> bool
where
    S: Monoid + ?Sized,
    G: Generator<S::Elem> + ?Sized,
    O: Observer<S::Elem> + ?Sized,
{
    let associative = monoid.is_associative_traced(generator, observer);
    associative & monoid.is_identity_traced(generator, observer)
}

fn group_round<S, G, O>(group: &S, generator: &mut G, observer: &mut O) -> bool
where
    S: Group + ?Sized,
    G: Generator<S::Elem> + ?Sized,
    O: Observer<S::Elem> + ?Sized,
{
    let monoid = monoid_round(group, generator, observer);
    monoid & group.is_inverse_traced(generator, observer)
}

fn commutative_group_round<S, G, O>(group: &S, generator: &mut G, observer: &mut O) -> bool
where
    S: CommutativeGroup + ?Sized,
    G: Generator<S::Elem> + ?Sized,
    O: Observer<S::Elem> + ?Sized,
{
    let group_laws = group_round(group, generator, observer);
    group_laws & group.is_commutative_traced(generator, observer)
}

fn distributive_round<D, G, O>(pair: &D, generator: &mut G, observer: &mut O) -> bool
where
    D: Distributive + ?Sized,
    G: Generator<<D::Additive as Magma>::Elem> + ?Sized,
    O: Observer<<D::Additive as Magma>::Elem> + ?Sized,
{
    let left = pair.is_left_distributive_traced(generator, observer);
    left & pair.is_right_distributive_traced(generator, observer)
}
