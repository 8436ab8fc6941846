//! Observation of individual law samples.
//!
//! Every law check reduces to one or more comparisons `lhs == rhs`. The
//! sides are handed to an [`Observer`] and logged at `trace` level before the
//! verdict is returned; neither affects the verdict.

use std::fmt::{self, Debug};

/// The algebraic laws that can be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Law {
    /// `(a ∘ b) ∘ c = a ∘ (b ∘ c)`
    Associativity,
    /// `a ∘ b = b ∘ a`
    Commutativity,
    /// `e ∘ a = a`
    LeftIdentity,
    /// `a ∘ e = a`
    RightIdentity,
    /// `a′ ∘ a = e`
    LeftInverse,
    /// `a ∘ a′ = e`
    RightInverse,
    /// `a · (b + c) = a · b + a · c`
    LeftDistributivity,
    /// `(b + c) · a = b · a + c · a`
    RightDistributivity,
    /// `0 · a = 0`
    LeftAnnihilation,
    /// `a · 0 = 0`
    RightAnnihilation,
    /// `1 · v = v`
    ScalarIdentity,
    /// `x · (y · v) = (x · y) · v`
    ScalarCompatibility,
    /// `x · (u + w) = x · u + x · w`
    VectorDistributivity,
    /// `(x + y) · v = x · v + y · v`
    ScalarDistributivity,
}

impl Law {
    /// Every law, in declaration order.
    pub const ALL: [Law; 14] = [
        Law::Associativity,
        Law::Commutativity,
        Law::LeftIdentity,
        Law::RightIdentity,
        Law::LeftInverse,
        Law::RightInverse,
        Law::LeftDistributivity,
        Law::RightDistributivity,
        Law::LeftAnnihilation,
        Law::RightAnnihilation,
        Law::ScalarIdentity,
        Law::ScalarCompatibility,
        Law::VectorDistributivity,
        Law::ScalarDistributivity,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Law::Associativity => "associativity",
            Law::Commutativity => "commutativity",
            Law::LeftIdentity => "left identity",
            Law::RightIdentity => "right identity",
            Law::LeftInverse => "left inverse",
            Law::RightInverse => "right inverse",
            Law::LeftDistributivity => "left distributivity",
            Law::RightDistributivity => "right distributivity",
            Law::LeftAnnihilation => "left annihilation",
            Law::RightAnnihilation => "right annihilation",
            Law::ScalarIdentity => "scalar identity",
            Law::ScalarCompatibility => "scalar compatibility",
            Law::VectorDistributivity => "vector distributivity",
            Law::ScalarDistributivity => "scalar distributivity",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Both sides of one sampled law.
#[derive(Debug, Clone, PartialEq)]
pub struct LawSample<T> {
    /// Which law was sampled.
    pub law: Law,
    /// Left-hand side as written in the law.
    pub lhs: T,
    /// Right-hand side as written in the law.
    pub rhs: T,
}

impl<T: PartialEq> LawSample<T> {
    /// Whether the two sides agree.
    #[inline]
    pub fn holds(&self) -> bool {
        self.lhs == self.rhs
    }
}

/// Receiver for law samples.
///
/// Implemented for `FnMut(&LawSample<T>)` closures and for [`Silent`].
pub trait Observer<T> {
    /// Called once per comparison, before the verdict is returned.
    fn observe(&mut self, sample: &LawSample<T>);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(&LawSample<T>),
{
    #[inline(always)]
    fn observe(&mut self, sample: &LawSample<T>) {
        self(sample)
    }
}

/// Observer that ignores every sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl<T> Observer<T> for Silent {
    #[inline(always)]
    fn observe(&mut self, _sample: &LawSample<T>) {}
}

/// Observer that keeps every sample, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<T> {
    samples: Vec<LawSample<T>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Samples seen so far.
    pub fn samples(&self) -> &[LawSample<T>] {
        &self.samples
    }

    /// Consume the recorder, returning its samples.
    pub fn into_samples(self) -> Vec<LawSample<T>> {
        self.samples
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Observer<T> for Recorder<T> {
    fn observe(&mut self, sample: &LawSample<T>) {
        self.samples.push(sample.clone());
    }
}

/// Compare `lhs` with `rhs` for `law`, reporting both sides to `observer`.
///
/// This is the single point through which every law check in this
/// workspace produces its verdict.
pub fn settle<T, O>(law: Law, lhs: T, rhs: T, observer: &mut O) -> bool
where
    T: PartialEq + Debug,
    O: Observer<T> + ?Sized,
{
    log::trace!("{law}: lhs = {lhs:?}, rhs = {rhs:?}");
    let sample = LawSample { law, lhs, rhs };
    let holds = sample.holds();
    observer.observe(&sample);
    holds
}
