//! snailsplit - Consecutive digit splitting and spiral matrix traversal.
//!
//! This crate provides two independent algorithms: splitting a digit string
//! into a run of consecutive increasing integers, and walking a square
//! matrix in clockwise spiral ("snail") order.
//!
//! # Example
//!
//! ```
//! use snailsplit::{spiral_order, split_with_sequence};
//!
//! let (valid, numbers) = split_with_sequence("99100");
//! assert!(valid);
//! assert_eq!(numbers, ["99", "100"]);
//!
//! let matrix = vec![vec![1, 2], vec![3, 4]];
//! assert_eq!(spiral_order(&matrix), vec![1, 2, 4, 3]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and input validation
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Consecutive increasing splits of digit strings
//! - [`spiral`]: Clockwise spiral traversal of square matrices
//! - [`input`]: Matrix loading from JSON and YAML files
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod spiral;
pub mod splitting;

// Re-export commonly used items
pub use error::{Result, SnailsplitError};
pub use spiral::{spiral_order, SquareMatrix};
pub use splitting::{is_consecutive_split, split_with_sequence, ConsecutiveSequence};
