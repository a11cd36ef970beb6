//! Board model and game rules for 3×3 Tic-Tac-Toe.
//!
//! - [`core`] - value types: [`Player`], [`Move`], [`Board`] and the
//!   [`WINNING_LINES`] table
//! - [`engine`] - [`Game`], a single game with turn order, move history and
//!   win/draw detection
//!
//! Search engines consume [`Board`] snapshots and never mutate a caller's
//! board; [`Board`] is a small `Copy` value, so every simulation works on its
//! own copy.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell index {index} is out of range (expected 0..9)")]
pub struct InvalidMoveError {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value} at index {index} (expected -1, 0 or 1)")]
pub struct InvalidCellError {
    pub index: usize,
    pub value: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("unexpected character {_0:?} in board")]
    InvalidChar(#[error(not(source))] char),
    #[display("expected 9 cells, got {_0}")]
    WrongLength(#[error(not(source))] usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Move),
    #[display("game is already over")]
    GameOver,
}
