/// A stateful source of sample values.
///
/// Every call advances the generator's state, so consecutive calls are
/// expected to return different values. Law checks borrow the generator
/// mutably and call it a fixed number of times in a fixed order; they never
/// store it.
pub trait Generator<T> {
    /// Produce the next value.
    fn generate(&mut self) -> T;
}

impl<T, F> Generator<T> for F
where
    F: FnMut() -> T,
{
    #[inline(always)]
    fn generate(&mut self) -> T {
        self()
    }
}
