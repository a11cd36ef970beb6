//! Core value types of the 3×3 board.
//!
//! - [`Player`] - the two sides, `X` (+1, moves first) and `O` (−1)
//! - [`Move`] - a validated cell index in `0..9`
//! - [`Board`] - nine cells in row-major order
//! - [`WINNING_LINES`] - the eight rows, columns and diagonals
//!
//! Cell indices map onto the grid as follows:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

pub use self::{board::*, lines::*, moves::*, player::*};

pub(crate) mod board;
pub(crate) mod lines;
pub(crate) mod moves;
pub(crate) mod player;
