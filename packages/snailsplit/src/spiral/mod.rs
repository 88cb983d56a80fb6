//! Clockwise spiral ("snail") traversal of square matrices.
//!
//! The walk starts at the top-left corner and peels the grid ring by ring:
//!
//! ```text
//!  1 →  2 →  3
//!            ↓
//!  4 →  5    6
//!  ↑         ↓
//!  7 ←  8 ←  9      =>  1 2 3 6 9 8 7 4 5
//! ```

mod types;
mod walker;

pub use types::SquareMatrix;
pub use walker::{spiral_order, spiral_order_checked, spiral_positions};
