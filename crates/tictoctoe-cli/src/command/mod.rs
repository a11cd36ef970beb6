use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use self::{arena::ArenaArg, play::PlayArg, suggest::SuggestArg};

mod arena;
mod play;
mod search_args;
mod suggest;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tictoctoe",
    author,
    version,
    about = "Tic-Tac-Toe game with genetic algorithm.",
    long_about = None
)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Print the engine's move for a given board as JSON
    Suggest(#[clap(flatten)] SuggestArg),
    /// Let the engine play a series of games and report the results
    Arena(#[clap(flatten)] ArenaArg),
}

impl CommandArgs {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level())
        .init()?;

    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Suggest(arg) => suggest::run(&arg)?,
        Mode::Arena(arg) => arena::run(&arg)?,
    }
    Ok(())
}
