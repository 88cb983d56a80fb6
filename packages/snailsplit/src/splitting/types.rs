//! Types for the consecutive splitting system.

use std::fmt;

use serde::Serialize;

/// A run of consecutive increasing integers recovered from a digit string.
///
/// Numbers are held as canonical decimal text, so their size is bounded only
/// by the input. Every element is exactly one greater than its predecessor.
/// Sequences produced by the split engine always hold at least two numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConsecutiveSequence {
    numbers: Vec<String>,
}

impl ConsecutiveSequence {
    /// Build a sequence from already-validated numbers.
    pub(crate) fn from_numbers(numbers: Vec<String>) -> Self {
        debug_assert!(
            numbers.windows(2).all(|w| is_successor(&w[0], &w[1])),
            "numbers must be consecutive"
        );
        Self { numbers }
    }

    /// The numbers in order, as decimal text.
    #[must_use]
    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Consume the sequence, returning its numbers.
    #[must_use]
    pub fn into_numbers(self) -> Vec<String> {
        self.numbers
    }

    /// The first number, if any.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.numbers.first().map(String::as_str)
    }

    /// Number of integers in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Concatenate the numbers back into a digit string.
    #[must_use]
    pub fn to_digit_string(&self) -> String {
        self.numbers.concat()
    }
}

fn is_successor(prev: &str, next: &str) -> bool {
    let mut digits = prev.as_bytes().to_vec();
    super::engine::increment_decimal(&mut digits);
    digits == next.as_bytes()
}

impl fmt::Display for ConsecutiveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numbers.join(" -> "))
    }
}
