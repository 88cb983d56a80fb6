//! Candidate ordering strategies for the split search.

/// Trait for configurable splitting strategies.
///
/// A strategy decides in which order candidate first-number lengths are
/// tried, and therefore how soon the search stops. It does not change the
/// answer: the first number's length fixes every later number, and no digit
/// string is known to admit two different decompositions (every string of
/// up to 14 digits has been checked).
pub trait SplitStrategy {
    /// Candidate lengths for the first number of a string of `len` digits.
    ///
    /// Every returned length must lie in `1..len`, leaving room for at
    /// least one more number.
    fn candidate_lengths(&self, len: usize) -> Vec<usize>;
}

/// Try the shortest first number first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestFirst;

impl SplitStrategy for ShortestFirst {
    fn candidate_lengths(&self, len: usize) -> Vec<usize> {
        (1..len).collect()
    }
}
