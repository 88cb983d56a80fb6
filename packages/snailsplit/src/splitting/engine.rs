//! Split engine that searches a digit string for consecutive decompositions.
//!
//! Numbers are never parsed into a machine integer: the walk compares the
//! input against decimal text and increments that text in place, so inputs
//! of any length are decided exactly.

use super::strategy::{ShortestFirst, SplitStrategy};
use super::types::ConsecutiveSequence;
use crate::config::{validate_digits, MIN_SEQUENCE_LEN};
use crate::error::Result;

/// Engine for splitting digit strings into consecutive integers.
///
/// Tries candidate first numbers in the order given by the strategy and
/// greedily walks the rest of the string for each one.
#[derive(Debug, Clone, Default)]
pub struct SplitEngine<S: SplitStrategy> {
    strategy: S,
}

impl<S: SplitStrategy> SplitEngine<S> {
    /// Create a new split engine.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Find the first decomposition in strategy order.
    ///
    /// Returns `None` when no split into at least two consecutive numbers
    /// exists, including for the empty and single-digit strings.
    pub fn find(&self, ch: &str) -> Option<ConsecutiveSequence> {
        let found = self
            .candidates(ch)
            .find_map(|start| sequence_from(ch, start));

        match &found {
            Some(seq) => tracing::debug!(input = %ch, sequence = %seq, "Consecutive split found"),
            None => tracing::debug!(input = %ch, "No consecutive split"),
        }

        found
    }

    /// Candidate start numbers, skipping prefixes with a leading zero.
    fn candidates<'a>(&self, ch: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let bytes = ch.as_bytes();
        self.strategy
            .candidate_lengths(bytes.len())
            .into_iter()
            .filter_map(move |first_len| {
                let prefix = bytes.get(..first_len)?;
                if !is_canonical_number(prefix) {
                    tracing::trace!(first_len, "Skipping prefix that is not a canonical number");
                    return None;
                }
                std::str::from_utf8(prefix).ok()
            })
    }
}

/// Non-empty ASCII digits with no leading zero, unless exactly `"0"`.
fn is_canonical_number(digits: &[u8]) -> bool {
    match digits {
        [] => false,
        [b'0', _, ..] => false,
        _ => digits.iter().all(u8::is_ascii_digit),
    }
}

/// Add one to a decimal number held as ASCII digits.
pub(super) fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    // All nines: 999 -> 1000
    digits.insert(0, b'1');
}

/// Walk `ch` as `start, start + 1, ...` and return the numbers consumed.
///
/// `start` must be a canonical decimal number (digits only, no leading
/// zero unless it is `"0"`). Returns `None` otherwise, on the first
/// mismatch, when the string is not consumed exactly, or when fewer than
/// two numbers were read.
pub fn sequence_from(ch: &str, start: &str) -> Option<ConsecutiveSequence> {
    if !is_canonical_number(start.as_bytes()) {
        return None;
    }

    let bytes = ch.as_bytes();
    let mut pos = 0;
    let mut current = start.as_bytes().to_vec();
    let mut numbers = Vec::new();

    while pos < bytes.len() {
        if !bytes[pos..].starts_with(&current) {
            tracing::trace!(start, pos, "Sequence mismatch");
            return None;
        }
        numbers.push(String::from_utf8(current.clone()).ok()?);
        pos += current.len();
        increment_decimal(&mut current);
    }

    if numbers.len() < MIN_SEQUENCE_LEN {
        return None;
    }

    Some(ConsecutiveSequence::from_numbers(numbers))
}

/// Check whether `ch` splits into consecutive numbers starting at `start`.
///
/// # Examples
/// ```
/// use snailsplit::splitting::validate_sequence;
///
/// assert!(validate_sequence("99100", "99"));
/// assert!(!validate_sequence("99100", "9"));
/// ```
#[must_use]
pub fn validate_sequence(ch: &str, start: &str) -> bool {
    sequence_from(ch, start).is_some()
}

/// Determine whether a digit string splits into consecutive increasing numbers.
///
/// Input must be digit-only; other characters never match but are not
/// reported. Use [`split_digits_checked`] to reject them explicitly.
///
/// # Examples
/// ```
/// use snailsplit::splitting::is_consecutive_split;
///
/// assert!(is_consecutive_split("979899100101"));
/// assert!(!is_consecutive_split("010"));
/// ```
#[must_use]
pub fn is_consecutive_split(ch: &str) -> bool {
    SplitEngine::new(ShortestFirst).find(ch).is_some()
}

/// Split a digit string and report the sequence as decimal text.
///
/// Returns `(true, numbers)` for the decomposition found scanning the
/// shortest first number first, or `(false, [])` when none exists.
/// Numbers are unbounded, hence returned as decimal strings.
#[must_use]
pub fn split_with_sequence(ch: &str) -> (bool, Vec<String>) {
    match SplitEngine::new(ShortestFirst).find(ch) {
        Some(seq) => (true, seq.into_numbers()),
        None => (false, Vec::new()),
    }
}

/// Validate `ch` as digits, then split it.
///
/// # Errors
/// Returns `SnailsplitError::InvalidDigits` if `ch` contains anything
/// other than `0`-`9`.
pub fn split_digits_checked(ch: &str) -> Result<Option<ConsecutiveSequence>> {
    validate_digits(ch)?;
    Ok(SplitEngine::new(ShortestFirst).find(ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnailsplitError;
    use pretty_assertions::assert_eq;

    fn split(ch: &str) -> Option<Vec<String>> {
        let (found, numbers) = split_with_sequence(ch);
        assert_eq!(found, !numbers.is_empty());
        found.then_some(numbers)
    }

    fn texts(numbers: &[&str]) -> Option<Vec<String>> {
        Some(numbers.iter().map(|n| (*n).to_string()).collect())
    }

    #[test]
    fn test_empty_and_single_digit() {
        assert!(!is_consecutive_split(""));
        assert!(!is_consecutive_split("1"));
        assert!(!is_consecutive_split("0"));
        assert_eq!(split_with_sequence(""), (false, Vec::<String>::new()));
    }

    #[test]
    fn test_leading_zero_rejected() {
        // "0", "1" matches, then "2" does not match "0"; "01" is never a start
        assert!(!is_consecutive_split("010"));
    }

    #[test]
    fn test_zero_is_valid_start() {
        assert_eq!(split("01"), texts(&["0", "1"]));
        assert_eq!(split("012"), texts(&["0", "1", "2"]));
    }

    #[test]
    fn test_no_split() {
        assert!(!is_consecutive_split("111"));
        assert!(!is_consecutive_split("191011"));
        assert!(!is_consecutive_split("21"));
    }

    #[test]
    fn test_digit_count_rollover() {
        assert_eq!(split("99100"), texts(&["99", "100"]));
        assert_eq!(split("91011"), texts(&["9", "10", "11"]));
        assert_eq!(
            split("979899100101"),
            texts(&["97", "98", "99", "100", "101"])
        );
        assert_eq!(
            split("99991000010001"),
            texts(&["9999", "10000", "10001"])
        );
    }

    #[test]
    fn test_shortest_first_policy() {
        assert_eq!(split("12345"), texts(&["1", "2", "3", "4", "5"]));
        assert_eq!(
            split("67891011"),
            texts(&["6", "7", "8", "9", "10", "11"])
        );
    }

    #[test]
    fn test_two_numbers_minimum() {
        assert!(is_consecutive_split("12"));
        assert!(!validate_sequence("5", "5"));
    }

    #[test]
    fn test_sequence_from_rejects_leftover() {
        // 1, 2 match, then "3" does not match the trailing "9"
        assert!(sequence_from("129", "1").is_none());
        assert!(sequence_from("1", "1").is_none());
    }

    #[test]
    fn test_sequence_from_rejects_non_canonical_start() {
        assert!(sequence_from("0102", "01").is_none());
        assert!(sequence_from("12", "").is_none());
        assert!(sequence_from("+1+2", "+1").is_none());
    }

    #[test]
    fn test_non_digit_input_never_matches() {
        assert!(!is_consecutive_split("+1+2"));
        assert!(!is_consecutive_split("1a2"));
        assert!(!is_consecutive_split("é1"));
    }

    #[test]
    fn test_split_digits_checked() {
        let seq = split_digits_checked("91011").unwrap().unwrap();
        assert_eq!(seq.numbers(), &["9", "10", "11"]);
        assert!(split_digits_checked("111").unwrap().is_none());

        let err = split_digits_checked("9-10").unwrap_err();
        assert!(matches!(err, SnailsplitError::InvalidDigits(s) if s == "9-10"));
    }

    #[test]
    fn test_run_wider_than_machine_integers() {
        // 10^39 followed by 10^39 + 1: 80 digits
        let first = format!("1{}", "0".repeat(39));
        let second = format!("1{}1", "0".repeat(38));
        let ch = format!("{first}{second}");

        assert!(is_consecutive_split(&ch));
        assert_eq!(split(&ch), Some(vec![first, second]));
    }

    #[test]
    fn test_run_crossing_u128_max() {
        let max = u128::MAX.to_string();
        let next = "340282366920938463463374607431768211456".to_string();
        let after = "340282366920938463463374607431768211457".to_string();
        let ch = format!("{max}{next}{after}");

        assert_eq!(split(&ch), Some(vec![max, next, after]));
    }

    #[test]
    fn test_run_crossing_digit_count_at_width() {
        let nines = "9".repeat(45);
        let power = format!("1{}", "0".repeat(45));
        let ch = format!("{nines}{power}");

        assert_eq!(split(&ch), Some(vec![nines, power]));
    }

    #[test]
    fn test_increment_decimal() {
        let cases = [("0", "1"), ("9", "10"), ("199", "200"), ("999", "1000"), ("1234", "1235")];
        for (input, expected) in cases {
            let mut digits = input.as_bytes().to_vec();
            increment_decimal(&mut digits);
            assert_eq!(String::from_utf8(digits).unwrap(), expected);
        }
    }

    #[test]
    fn test_is_canonical_number() {
        assert!(is_canonical_number(b"0"));
        assert!(is_canonical_number(b"100"));
        assert!(!is_canonical_number(b""));
        assert!(!is_canonical_number(b"01"));
        assert!(!is_canonical_number(b"+1"));
        assert!(!is_canonical_number(b"1a"));
    }
}
