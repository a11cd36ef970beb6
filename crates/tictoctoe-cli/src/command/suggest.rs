use std::path::PathBuf;

use rand::Rng;
use serde::Serialize;
use tictoctoe_engine::{Board, Game, GameState, Move, Player};
use tictoctoe_search::{NoopObserver, SearchConfig, move_eval::MoveScore, search_with_observer};

use crate::{command::search_args::SearchArgs, util};

/// Side to search for.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Side {
    X,
    #[default]
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SuggestArg {
    /// Board as nine cells in row-major order: `X`, `O`, or `.` for empty
    /// (e.g. `XX..O....`)
    board: Board,
    /// Side to move
    #[arg(long, default_value = "o")]
    player: Side,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
    #[clap(flatten)]
    search: SearchArgs,
}

#[derive(Debug, Clone, Serialize)]
struct CellScore {
    cell: Move,
    score: MoveScore,
}

#[derive(Debug, Clone, Serialize)]
struct Suggestion {
    board: Board,
    player: Player,
    config: SearchConfig,
    /// Zero-based cell index.
    #[serde(rename = "move")]
    chosen: Move,
    scores: Vec<CellScore>,
    generations: usize,
    best_fitness: Option<u32>,
    best_chromosome: Option<Vec<Move>>,
}

fn suggest<R>(
    board: Board,
    player: Player,
    config: SearchConfig,
    rng: &mut R,
) -> anyhow::Result<Suggestion>
where
    R: Rng,
{
    match Game::from_board(board, player).state() {
        GameState::InProgress => {}
        GameState::Won(winner) => anyhow::bail!("The game is already over: {winner} has won"),
        GameState::Draw => anyhow::bail!("The game is already over: the board is full"),
    }

    let outcome = search_with_observer(&board, player, &config, rng, &mut NoopObserver);
    Ok(Suggestion {
        board,
        player,
        config,
        chosen: outcome.chosen,
        scores: outcome
            .scores
            .iter()
            .map(|&(cell, score)| CellScore { cell, score })
            .collect(),
        generations: outcome.generations,
        best_fitness: outcome.best.as_ref().map(|ind| ind.fitness()),
        best_chromosome: outcome
            .best
            .as_ref()
            .map(|ind| ind.chromosome().genes().to_vec()),
    })
}

pub(crate) fn run(arg: &SuggestArg) -> anyhow::Result<()> {
    let SuggestArg {
        board,
        player,
        output,
        search,
    } = arg;

    let config = search.to_config()?;
    let suggestion = suggest(*board, (*player).into(), config, &mut search.rng())?;
    eprintln!(
        "{} plays cell {} after {} generations",
        suggestion.player,
        suggestion.chosen.index() + 1,
        suggestion.generations
    );
    util::save_json(&suggestion, output.as_deref())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn config() -> SearchConfig {
        SearchConfig::new(10, 4, 0.1).unwrap()
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("o".parse::<Side>().unwrap(), Side::O);
        assert_eq!("X".parse::<Side>().unwrap(), Side::X);
        assert!("z".parse::<Side>().is_err());
    }

    #[test]
    fn test_suggestion_json() {
        let board: Board = "XX.OO....".parse().unwrap();
        let mut rng = Pcg64::seed_from_u64(0);
        let suggestion = suggest(board, Player::O, config(), &mut rng).unwrap();
        let json = serde_json::to_value(&suggestion).unwrap();

        assert_eq!(json["board"], "XX.OO....");
        assert_eq!(json["player"], "O");
        assert_eq!(json["move"], 5);
        assert_eq!(json["generations"], 4);
        assert_eq!(json["scores"].as_array().unwrap().len(), 5);
        assert_eq!(json["scores"][0]["cell"], 2);
        assert_eq!(json["scores"][0]["score"], "block");
        assert_eq!(json["scores"][1]["score"], "win");
        assert_eq!(json["best_chromosome"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_finished_board_is_rejected() {
        let mut rng = Pcg64::seed_from_u64(1);
        for text in ["XXXOO....", "XOXXOOOXX"] {
            let board: Board = text.parse().unwrap();
            let err = suggest(board, Player::O, config(), &mut rng).unwrap_err();
            assert!(err.to_string().contains("already over"), "{err}");
        }
    }
}
