//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SnailsplitError};

/// Minimum number of integers a consecutive split must contain.
pub const MIN_SEQUENCE_LEN: usize = 2;

/// Matrix size used by `spiral` when neither a file nor a size is given.
pub const DEFAULT_DEMO_SIZE: usize = 5;

/// Largest matrix the `spiral --size` demo will build.
pub const MAX_DEMO_SIZE: usize = 64;

/// Minimum cell width when printing a matrix grid.
pub const GRID_CELL_WIDTH: usize = 3;

/// Digit string pattern: zero or more ASCII decimal digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("valid regex"));

/// Validate that a string consists of decimal digits only.
///
/// The empty string is valid: it simply has no split.
///
/// # Examples
/// ```
/// use snailsplit::config::validate_digits;
///
/// assert!(validate_digits("99100").is_ok());
/// assert!(validate_digits("").is_ok());
/// assert!(validate_digits("12a").is_err());
/// ```
pub fn validate_digits(ch: &str) -> Result<()> {
    if DIGITS_PATTERN.is_match(ch) {
        Ok(())
    } else {
        Err(SnailsplitError::InvalidDigits(ch.to_string()))
    }
}

/// Validate the size of a generated demo matrix.
///
/// # Examples
/// ```
/// use snailsplit::config::validate_demo_size;
///
/// assert!(validate_demo_size(5).is_ok());
/// assert!(validate_demo_size(0).is_err());
/// ```
pub fn validate_demo_size(size: usize) -> Result<()> {
    if (1..=MAX_DEMO_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(SnailsplitError::InvalidSize {
            size,
            max: MAX_DEMO_SIZE,
        })
    }
}
