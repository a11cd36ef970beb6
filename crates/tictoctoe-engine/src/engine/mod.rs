//! Game rules on top of the core board types.
//!
//! - [`Game`] - a single game: turn order, move history and end detection
//! - [`GameState`] - in progress, won by a player, or drawn
//! - [`GameRecord`] - serializable summary of a game
//!
//! # Game Flow
//!
//! 1. Start with [`Game::new`] (X to move on an empty board)
//! 2. Apply moves with [`Game::play`], alternating sides
//! 3. After every move the mover is checked for a line first, then the board
//!    for fullness
//! 4. Once the state is no longer [`GameState::InProgress`], further moves are
//!    rejected
//!
//! # Example
//!
//! ```
//! use tictoctoe_engine::{Game, GameState, Move, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.play(Move::new(index).unwrap()).unwrap();
//! }
//! assert_eq!(game.state(), GameState::Won(Player::X));
//! ```

pub use self::game::*;

mod game;
