//! Consecutive increasing splitting of digit strings.
//!
//! A digit string such as `"979899100101"` splits into `97, 98, 99, 100,
//! 101`: at least two numbers, each one greater than the last, written
//! back to back. Numbers other than `0` itself never carry a leading zero,
//! and they are kept as decimal text so no input is too long to decide.

mod engine;
mod strategy;
mod types;

pub use engine::{
    is_consecutive_split, sequence_from, split_digits_checked, split_with_sequence,
    validate_sequence, SplitEngine,
};
pub use strategy::{ShortestFirst, SplitStrategy};
pub use types::ConsecutiveSequence;
