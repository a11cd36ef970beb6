use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{
    MoveError,
    core::{board::Board, moves::Move, player::Player},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    Won(Player),
    Draw,
}

impl GameState {
    /// Computes the state of `board` right after `mover` played on it.
    ///
    /// The mover's line is checked before fullness, so a winning last move on
    /// a full board is a win, not a draw.
    #[must_use]
    pub fn after_move(board: &Board, mover: Player) -> Self {
        if board.check_winner(mover) {
            Self::Won(mover)
        } else if board.is_full() {
            Self::Draw
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// A single game of Tic-Tac-Toe.
///
/// Holds the authoritative board, whose turn it is and the moves played so
/// far. Search engines receive copies of [`Game::board`] and return a
/// [`Move`] which the owner applies with [`Game::play`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: ArrayVec<Move, { Move::COUNT }>,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::EMPTY,
            to_move: Player::FIRST,
            history: ArrayVec::new(),
            state: GameState::InProgress,
        }
    }

    /// Continues a game from an arbitrary position.
    ///
    /// The state is derived from the board: a line for either player ends the
    /// game, as does a full board. The history starts empty.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let state = match board.winner() {
            Some(player) => GameState::Won(player),
            None if board.is_full() => GameState::Draw,
            None => GameState::InProgress,
        };
        Self {
            board,
            to_move,
            history: ArrayVec::new(),
            state,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.state.is_in_progress() && self.board.is_empty_at(mv)
    }

    /// Places the current player's mark on `mv` and passes the turn.
    ///
    /// Returns the resulting state. The turn does not pass once the game has
    /// ended, so [`Game::to_move`] then names the last mover.
    pub fn play(&mut self, mv: Move) -> Result<GameState, MoveError> {
        if !self.state.is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty_at(mv) {
            return Err(MoveError::Occupied(mv));
        }
        let mover = self.to_move;
        self.board.place(mv, mover);
        // At most nine empty cells exist, so the history never overflows.
        self.history.push(mv);
        self.state = GameState::after_move(&self.board, mover);
        if self.state.is_in_progress() {
            self.to_move = mover.opponent();
        }
        Ok(self.state)
    }

    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            moves: self.history.to_vec(),
            final_board: self.board,
            outcome: self.state,
        }
    }
}

/// Serializable summary of a game: the moves in order, the final board and
/// the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub final_board: Board,
    pub outcome: GameState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(index: usize) -> Move {
        Move::new(index).unwrap()
    }

    fn play_all(game: &mut Game, moves: &[usize]) -> GameState {
        let mut state = game.state();
        for &index in moves {
            state = game.play(mv(index)).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        game.play(mv(4)).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.play(mv(0)).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().get(mv(4)), Some(Player::X));
        assert_eq!(game.board().get(mv(0)), Some(Player::O));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = Game::new();
        game.play(mv(4)).unwrap();
        assert_eq!(game.play(mv(4)), Err(MoveError::Occupied(mv(4))));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[mv(4)]);
    }

    #[test]
    fn test_o_wins_column() {
        let mut game = Game::new();
        let state = play_all(&mut game, &[0, 1, 3, 4, 8, 7]);
        assert_eq!(state, GameState::Won(Player::O));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.play(mv(2)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        let state = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state, GameState::Draw);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut game = Game::new();
        // X O X / O X O / O X X -- X completes the main diagonal on the ninth move
        let state = play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(state, GameState::Won(Player::X));
    }

    #[test]
    fn test_from_board_detects_finished_games() {
        let won: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            Game::from_board(won, Player::O).state(),
            GameState::Won(Player::X)
        );
        let open: Board = "XX.OO....".parse().unwrap();
        let game = Game::from_board(open, Player::X);
        assert!(game.state().is_in_progress());
        assert!(game.is_legal(mv(2)));
        assert!(!game.is_legal(mv(0)));
    }

    #[test]
    fn test_record_serialization() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        let record = game.record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["moves"], serde_json::json!([0, 3, 1, 4, 2]));
        assert_eq!(json["final_board"], "XXXOO....");
        assert_eq!(json["outcome"], serde_json::json!({ "won": "X" }));
        let back: GameRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
