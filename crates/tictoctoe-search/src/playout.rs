//! Simulated playouts: turning a chromosome into a game result.
//!
//! A playout copies the board, then reads the chromosome left to right:
//!
//! 1. If the gene's cell is occupied, skip it; the turn does not pass
//! 2. Otherwise place the current player's mark there
//! 3. If that player now owns a line, the playout ends
//! 4. Otherwise the turn passes to the other player
//!
//! The current player always starts as [`Player::FIRST`] regardless of whose
//! turn it is on the input board, and both sides' moves come from the same
//! chromosome. A chromosome that runs out of genes without a winner counts as
//! a loss for everyone. Skipped genes make many chromosomes end early; the
//! search tolerates this and does not resample.

use tictoctoe_engine::{Board, Player};

use crate::chromosome::Chromosome;

/// Number of playouts summed into one fitness score.
pub const PLAYOUTS_PER_CHROMOSOME: u32 = 10;

/// Result of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playout {
    /// Board when the simulation stopped.
    pub final_board: Board,
    /// Player who completed a line, if any.
    pub winner: Option<Player>,
    /// Genes that were actually placed (occupied cells excluded).
    pub moves_applied: usize,
}

/// Simulates a game on a private copy of `board`.
#[must_use]
pub fn simulate(chromosome: &Chromosome, board: &Board) -> Playout {
    let mut board = *board;
    let mut current = Player::FIRST;
    let mut moves_applied = 0;

    for mv in chromosome.genes() {
        if !board.is_empty_at(mv) {
            continue;
        }
        board.place(mv, current);
        moves_applied += 1;
        if board.check_winner(current) {
            return Playout {
                final_board: board,
                winner: Some(current),
                moves_applied,
            };
        }
        current = current.opponent();
    }

    Playout {
        final_board: board,
        winner: None,
        moves_applied,
    }
}

/// Plays one game and returns `1` if `perspective` won it, `0` otherwise.
#[must_use]
pub fn play_game(chromosome: &Chromosome, board: &Board, perspective: Player) -> u32 {
    u32::from(simulate(chromosome, board).winner == Some(perspective))
}

/// Sums [`PLAYOUTS_PER_CHROMOSOME`] playouts into a fitness score in
/// `0..=10`.
#[must_use]
pub fn evaluate_fitness(chromosome: &Chromosome, board: &Board, perspective: Player) -> u32 {
    (0..PLAYOUTS_PER_CHROMOSOME)
        .map(|_| play_game(chromosome, board, perspective))
        .sum()
}
