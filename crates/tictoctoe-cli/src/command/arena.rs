use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;
use serde::Serialize;
use tictoctoe_engine::{Game, GameRecord, GameState, Player};
use tictoctoe_search::{DEFAULT_SEARCH_PLAYER, SearchConfig};

use crate::{
    agent::{Agent, EngineAgent, RandomAgent},
    command::search_args::SearchArgs,
    util,
};

const ENGINE_PLAYER: Player = DEFAULT_SEARCH_PLAYER;

/// Who plays X against the engine.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::FromStr)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    #[default]
    Random,
    Engine,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ArenaArg {
    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    pub(super) games: usize,
    /// Opponent playing X
    #[arg(long, default_value = "random")]
    opponent: Opponent,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
    #[clap(flatten)]
    search: SearchArgs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
struct Tally {
    engine_wins: usize,
    opponent_wins: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameState) {
        match outcome {
            GameState::Won(player) if player == ENGINE_PLAYER => self.engine_wins += 1,
            GameState::Won(_) => self.opponent_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::InProgress => unreachable!("finished games only"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ArenaReport {
    generated_at: DateTime<Utc>,
    config: SearchConfig,
    engine_player: Player,
    opponent: Opponent,
    games: usize,
    tally: Tally,
    records: Vec<GameRecord>,
}

fn play_game<'a>(engine: &mut (dyn Agent + 'a), opponent: &mut (dyn Agent + 'a)) -> GameRecord {
    let mut game = Game::new();
    while game.state().is_in_progress() {
        let agent = if game.to_move() == ENGINE_PLAYER {
            &mut *engine
        } else {
            &mut *opponent
        };
        let mv = agent.select_move(&game);
        game.play(mv).expect("agents only return empty cells");
    }
    game.record()
}

fn run_arena<R>(
    games: usize,
    opponent: Opponent,
    config: SearchConfig,
    rng: &mut R,
) -> ArenaReport
where
    R: Rng,
{
    let mut engine = EngineAgent::new(config, Pcg64::seed_from_u64(rng.random()));
    let mut opponent_agent: Box<dyn Agent> = match opponent {
        Opponent::Random => Box::new(RandomAgent::new(Pcg64::seed_from_u64(rng.random()))),
        Opponent::Engine => Box::new(EngineAgent::new(
            config,
            Pcg64::seed_from_u64(rng.random()),
        )),
    };

    let mut tally = Tally::default();
    let mut records = Vec::with_capacity(games);
    for game_index in 0..games {
        let record = play_game(&mut engine, opponent_agent.as_mut());
        log::info!(
            "game #{game_index}: {:?} in {} moves",
            record.outcome,
            record.moves.len()
        );
        tally.record(record.outcome);
        records.push(record);
    }

    ArenaReport {
        generated_at: Utc::now(),
        config,
        engine_player: ENGINE_PLAYER,
        opponent,
        games,
        tally,
        records,
    }
}

pub(crate) fn run(arg: &ArenaArg) -> anyhow::Result<()> {
    let ArenaArg {
        games,
        opponent,
        output,
        search,
    } = arg;

    let config = search.to_config()?;
    eprintln!("Playing {games} games: engine ({ENGINE_PLAYER}) vs {opponent:?}");
    let report = run_arena(*games, *opponent, config, &mut search.rng());

    eprintln!("Results:");
    eprintln!("  Engine wins:   {}", report.tally.engine_wins);
    eprintln!("  Opponent wins: {}", report.tally.opponent_wins);
    eprintln!("  Draws:         {}", report.tally.draws);

    util::save_json(&report, output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig::new(8, 2, 0.1).unwrap()
    }

    #[test]
    fn test_tally_adds_up() {
        let mut rng = Pcg64::seed_from_u64(0);
        let report = run_arena(6, Opponent::Random, config(), &mut rng);
        let Tally {
            engine_wins,
            opponent_wins,
            draws,
        } = report.tally;
        assert_eq!(engine_wins + opponent_wins + draws, 6);
        assert_eq!(report.records.len(), 6);
        for record in &report.records {
            assert!(!record.outcome.is_in_progress());
            assert!(record.moves.len() >= 5);
        }
    }

    #[test]
    fn test_engine_mirror_match_is_deterministic() {
        // Move choice only depends on the board, so every engine-vs-engine
        // game is the same.
        let mut rng = Pcg64::seed_from_u64(1);
        let report = run_arena(3, Opponent::Engine, config(), &mut rng);
        assert!(report.records.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_report_json() {
        let mut rng = Pcg64::seed_from_u64(2);
        let report = run_arena(2, Opponent::Random, config(), &mut rng);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["games"], 2);
        assert_eq!(json["opponent"], "random");
        assert_eq!(json["engine_player"], "O");
        assert_eq!(json["config"]["population_size"], 8);
        assert!(json["generated_at"].is_string());
        assert_eq!(json["records"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_opponent_parsing() {
        assert_eq!("random".parse::<Opponent>().unwrap(), Opponent::Random);
        assert_eq!("engine".parse::<Opponent>().unwrap(), Opponent::Engine);
    }
}
