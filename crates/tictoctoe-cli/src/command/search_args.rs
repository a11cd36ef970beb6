use std::path::PathBuf;

use anyhow::Context as _;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use tictoctoe_search::SearchConfig;

use crate::util;

/// Search engine options shared by all subcommands.
///
/// Values given on the command line override values from `--config`, which in
/// turn override the built-in defaults.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SearchArgs {
    /// Population size [default: 50]
    #[arg(short, long)]
    population: Option<usize>,
    /// Number of generations [default: 50]
    #[arg(short, long)]
    generations: Option<usize>,
    /// Mutation rate [default: 0.1]
    #[arg(short, long)]
    mutation: Option<f32>,
    /// Search configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for the random number generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl SearchArgs {
    pub(crate) fn to_config(&self) -> anyhow::Result<SearchConfig> {
        let base = match &self.config {
            Some(path) => util::read_search_config_file(path)?,
            None => SearchConfig::default(),
        };
        let config = SearchConfig::new(
            self.population.unwrap_or(base.population_size()),
            self.generations.unwrap_or(base.generations()),
            self.mutation.unwrap_or(base.mutation_rate()),
        )
        .context("Invalid search configuration")?;
        log::debug!("search configuration: {config:?}");
        Ok(config)
    }

    pub(crate) fn rng(&self) -> Pcg64 {
        match self.seed {
            Some(seed) => {
                log::info!("using random seed {seed}");
                Pcg64::seed_from_u64(seed)
            }
            None => Pcg64::from_os_rng(),
        }
    }
}
