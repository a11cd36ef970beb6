//! Population management and generational evolution.
//!
//! # Algorithm Overview
//!
//! Each generation of a search goes through:
//!
//! 1. **Evaluate Fitness** - every chromosome is scored by simulated playouts
//!    against the searched position ([`Population::evaluate_fitness`])
//! 2. **Elite Selection** - the best individual is copied unchanged into the
//!    next generation
//! 3. **Parent Selection** - two parents are drawn uniformly, with
//!    replacement, from the whole population
//! 4. **Crossover** - single-point crossover at a point in `[1, 8]`
//! 5. **Mutation** - with probability `mutation_rate`, one gene is replaced by
//!    a cell that is empty on the searched board
//!
//! # Ordering
//!
//! Unlike a sorted-population GA, individuals keep the order they were
//! created in. "Best" always means the first individual with the maximum
//! fitness, and the elite is placed at index 0 of the next generation. Seeded
//! searches depend on this to be reproducible.

use rand::{Rng, seq::IndexedRandom as _};
use tictoctoe_engine::{Board, Move, Player};

use crate::{chromosome::Chromosome, playout};

/// A chromosome together with its fitness from the last evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: u32,
}

impl Individual {
    #[must_use]
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: 0,
        }
    }

    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(Chromosome::random(rng))
    }

    #[must_use]
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Number of won playouts, `0..=10`.
    ///
    /// Zero until the individual has been evaluated.
    #[must_use]
    pub fn fitness(&self) -> u32 {
        self.fitness
    }
}

/// Summary of the fitness values of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessStats {
    pub min: u32,
    pub max: u32,
    pub mean: f32,
}

/// An ordered collection of individuals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `count` individuals with uniformly random genes.
    pub fn random<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..count).map(|_| Individual::random(rng)).collect();
        Self { individuals }
    }

    #[must_use]
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Scores every individual by playouts on `board` from `perspective`'s
    /// point of view. The order of individuals is left untouched.
    pub fn evaluate_fitness(&mut self, board: &Board, perspective: Player) {
        for ind in &mut self.individuals {
            ind.fitness = playout::evaluate_fitness(&ind.chromosome, board, perspective);
        }
    }

    /// Index of the first individual with the maximum fitness.
    #[must_use]
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, ind) in self.individuals.iter().enumerate() {
            if best.is_none_or(|(_, fitness)| ind.fitness > fitness) {
                best = Some((i, ind.fitness));
            }
        }
        best.map(|(i, _)| i)
    }

    #[must_use]
    pub fn best_individual(&self) -> Option<&Individual> {
        self.best_index().map(|i| &self.individuals[i])
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fitness_stats(&self) -> Option<FitnessStats> {
        let fitness = self.individuals.iter().map(Individual::fitness);
        let min = fitness.clone().min()?;
        let max = fitness.clone().max()?;
        let sum: u32 = fitness.sum();
        Some(FitnessStats {
            min,
            max,
            mean: sum as f32 / self.individuals.len() as f32,
        })
    }
}

/// Builds the next generation from an evaluated population.
#[derive(Debug, Clone, Copy)]
pub struct PopulationEvolver {
    /// Probability that a child receives one mutated gene.
    pub mutation_rate: f32,
}

impl PopulationEvolver {
    /// Evolves `population` into a new one of the same size.
    ///
    /// 1. The first best individual is kept unchanged at index 0
    /// 2. The other slots are children of two uniformly drawn parents,
    ///    crossed over and possibly mutated with a cell from
    ///    `mutation_cells`
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    #[must_use]
    pub fn evolve<R>(&self, population: &Population, mutation_cells: &[Move], rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        let elite = population
            .best_individual()
            .expect("population must not be empty");
        log::trace!(
            "elite {:?} with fitness {}",
            elite.chromosome.genes(),
            elite.fitness
        );

        let mut next_individuals = Vec::with_capacity(population.len());
        next_individuals.push(elite.clone());

        while next_individuals.len() < population.len() {
            let p1 = population.individuals.choose(rng).expect("population is not empty");
            let p2 = population.individuals.choose(rng).expect("population is not empty");
            let mut child =
                Chromosome::single_point_crossover(&p1.chromosome, &p2.chromosome, rng);
            child.mutate(self.mutation_rate, mutation_cells, rng);
            next_individuals.push(Individual::new(child));
        }

        Population {
            individuals: next_individuals,
        }
    }
}
