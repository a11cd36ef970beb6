use std::{io, path::PathBuf};

use crate::{
    agent::{Agent, EngineAgent},
    command::search_args::SearchArgs,
    util,
};

use self::session::TextSession;

mod session;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Let the genetic-algorithm engine play O
    #[arg(short, long)]
    pub(super) ai: bool,
    /// Save the finished game as JSON to this file
    #[arg(long, value_name = "FILE")]
    record: Option<PathBuf>,
    #[clap(flatten)]
    pub(super) search: SearchArgs,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { ai, record, search } = arg;

    let opponent: Option<Box<dyn Agent>> = if *ai {
        let config = search.to_config()?;
        Some(Box::new(EngineAgent::new(config, search.rng())))
    } else {
        None
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let game_record = TextSession::new(stdin, stdout, opponent).run()?;
    log::info!(
        "game finished after {} moves: {:?}",
        game_record.moves.len(),
        game_record.outcome
    );

    if let Some(path) = record {
        util::save_json(&game_record, Some(path.as_path()))?;
        eprintln!("Game saved to {}", path.display());
    }

    Ok(())
}
