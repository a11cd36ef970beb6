//! One-step move scoring and final move selection.
//!
//! Every empty cell gets a [`MoveScore`]:
//!
//! - [`MoveScore::Win`] - the mover completes a line there
//! - [`MoveScore::Block`] - the opponent would complete a line there
//! - [`MoveScore::Neutral`] - neither
//!
//! [`select_move`] returns the first cell (lowest index) with the highest
//! score. The tie-break is part of the contract: seeded runs must pick the
//! same cell every time.

use arrayvec::ArrayVec;
use serde::Serialize;
use tictoctoe_engine::{Board, Move, Player};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveScore {
    #[display("neutral")]
    Neutral = 0,
    #[display("block")]
    Block = 1,
    #[display("win")]
    Win = 2,
}

impl MoveScore {
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Scores placing `player`'s mark on `mv`.
///
/// `mv` is expected to be empty; an occupied cell is scored as if it were
/// overwritten.
#[must_use]
pub fn evaluate_move(board: &Board, mv: Move, player: Player) -> MoveScore {
    if board.with_move(mv, player).check_winner(player) {
        return MoveScore::Win;
    }
    let opponent = player.opponent();
    if board.with_move(mv, opponent).check_winner(opponent) {
        return MoveScore::Block;
    }
    MoveScore::Neutral
}

/// Scores every empty cell of `board` in index order.
#[must_use]
pub fn score_moves(board: &Board, player: Player) -> ArrayVec<(Move, MoveScore), { Move::COUNT }> {
    board
        .empty_cells()
        .into_iter()
        .map(|mv| (mv, evaluate_move(board, mv, player)))
        .collect()
}

/// Returns the first entry with the maximum score.
///
/// `Iterator::max_by_key` keeps the last maximum, which would break the
/// lowest-index tie-break.
#[must_use]
pub fn first_best(scores: &[(Move, MoveScore)]) -> Option<Move> {
    let mut best: Option<(Move, MoveScore)> = None;
    for &(mv, score) in scores {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Picks the move for `player`: the lowest-index empty cell with the highest
/// [`MoveScore`].
///
/// Returns `None` only for a full board.
#[must_use]
pub fn select_move(board: &Board, player: Player) -> Option<Move> {
    first_best(&score_moves(board, player))
}
