//! Genetic-algorithm move search for Tic-Tac-Toe.
//!
//! This crate chooses a move for one side of a 3×3 game. It does not search
//! the game tree exhaustively; it evolves a population of move sequences and
//! then picks a concrete cell with a one-step scoring rule.
//!
//! # How a Search Works
//!
//! 1. **Population** - create `population_size` chromosomes, each a sequence
//!    of nine random cell indices
//! 2. **Evaluation** - each chromosome is played out on a copy of the board
//!    (both sides' moves taken from the sequence, occupied cells skipped) and
//!    scores one point per won playout, ten playouts each
//! 3. **Elitism** - the first best chromosome survives unchanged
//! 4. **Reproduction** - the rest of the next generation comes from
//!    single-point crossover of uniformly drawn parents, with an occasional
//!    mutation to a cell that is empty on the real board
//! 5. **Repeat** - for `generations` rounds
//! 6. **Move selection** - every empty cell is scored: 2 if it wins on the
//!    spot, 1 if it blocks an immediate opponent win, 0 otherwise; the first
//!    best cell is returned
//!
//! # Architecture
//!
//! ```text
//! search / search_as / search_with_observer   (search loop, logging)
//!     ↓ evolves
//! Population (genetic)                         (elitism, parent choice)
//!     ↓ holds
//! Chromosome (chromosome)                      (random init, crossover, mutation)
//!     ↓ scored by
//! play_game (playout)                          (simulated games on board copies)
//!
//! score_moves / select_move (move_eval)        (final one-step decision)
//! ```
//!
//! # Randomness
//!
//! Every function that draws random numbers takes an explicit `R: Rng`
//! handle. With a seeded generator a search is a deterministic function of
//! the board and the configuration; there is no hidden global state.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//! use tictoctoe_engine::{Board, Player};
//! use tictoctoe_search::{SearchConfig, search_as};
//!
//! let board: Board = "XX..O....".parse().unwrap();
//! let config = SearchConfig::new(20, 10, 0.1).unwrap();
//! let mut rng = Pcg64::seed_from_u64(42);
//!
//! // O must block the top row.
//! let mv = search_as(&board, Player::O, &config, &mut rng);
//! assert_eq!(mv.index(), 2);
//! ```
//!
//! # Current Limitations
//!
//! - **Evolution does not steer the move**: the returned cell depends only on
//!   the one-step scores; the evolved population is available through
//!   [`SearchOutcome`] and [`SearchObserver`] but not used to break ties
//! - **Deterministic playouts**: a playout depends only on the chromosome and
//!   the board, so the ten playouts of one chromosome always agree and
//!   fitness is either 0 or 10
//! - **Single-threaded**: fitness evaluation runs sequentially

pub use self::{config::*, search::*};

pub mod chromosome;
mod config;
pub mod genetic;
pub mod move_eval;
pub mod playout;
mod search;
