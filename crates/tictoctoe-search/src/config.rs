use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SearchConfigError {
    #[display("population size must be at least 1")]
    EmptyPopulation,
    #[display("mutation rate must be within [0, 1], got {_0}")]
    InvalidMutationRate(#[error(not(source))] f32),
}

/// Parameters of one search call.
///
/// Constructed through [`SearchConfig::new`] (or [`Default`]), so a value of
/// this type always has a non-empty population and a mutation rate in
/// `[0, 1]`. Deserialization goes through the same validation; missing fields
/// take their default values.
///
/// # Example
///
/// ```
/// use tictoctoe_search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size(), 50);
/// assert_eq!(config.generations(), 50);
///
/// assert!(SearchConfig::new(0, 10, 0.1).is_err());
/// assert!(SearchConfig::new(10, 10, 1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchConfig")]
pub struct SearchConfig {
    population_size: usize,
    generations: usize,
    mutation_rate: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SearchConfig {
    pub const DEFAULT_POPULATION_SIZE: usize = 50;
    pub const DEFAULT_GENERATIONS: usize = 50;
    pub const DEFAULT_MUTATION_RATE: f32 = 0.1;

    pub const DEFAULT: Self = Self {
        population_size: Self::DEFAULT_POPULATION_SIZE,
        generations: Self::DEFAULT_GENERATIONS,
        mutation_rate: Self::DEFAULT_MUTATION_RATE,
    };

    /// Creates a validated configuration.
    ///
    /// `generations` may be zero: the search then skips evolution and only
    /// runs the final move selection.
    pub fn new(
        population_size: usize,
        generations: usize,
        mutation_rate: f32,
    ) -> Result<Self, SearchConfigError> {
        if population_size == 0 {
            return Err(SearchConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(SearchConfigError::InvalidMutationRate(mutation_rate));
        }
        Ok(Self {
            population_size,
            generations,
            mutation_rate,
        })
    }

    #[must_use]
    pub const fn population_size(&self) -> usize {
        self.population_size
    }

    #[must_use]
    pub const fn generations(&self) -> usize {
        self.generations
    }

    #[must_use]
    pub const fn mutation_rate(&self) -> f32 {
        self.mutation_rate
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSearchConfig {
    population_size: usize,
    generations: usize,
    mutation_rate: f32,
}

impl Default for RawSearchConfig {
    fn default() -> Self {
        let SearchConfig {
            population_size,
            generations,
            mutation_rate,
        } = SearchConfig::DEFAULT;
        Self {
            population_size,
            generations,
            mutation_rate,
        }
    }
}

impl TryFrom<RawSearchConfig> for SearchConfig {
    type Error = SearchConfigError;

    fn try_from(raw: RawSearchConfig) -> Result<Self, Self::Error> {
        Self::new(raw.population_size, raw.generations, raw.mutation_rate)
    }
}
