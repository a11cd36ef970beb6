//! Chromosome representation and genetic operators.
//!
//! A chromosome is a fixed-length sequence of move intentions. It is read
//! left to right during a playout (see [`playout`](crate::playout)); entries
//! pointing at occupied cells are skipped, so duplicates and stale moves are
//! tolerated rather than repaired.
//!
//! # Operations
//!
//! - **Initialization**: [`Chromosome::random`] draws every gene uniformly from
//!   all nine cells
//! - **Crossover**: [`Chromosome::single_point_crossover`] splices two parents
//!   at a point in `[1, 8]`
//! - **Mutation**: [`Chromosome::mutate`] replaces at most one gene with a cell
//!   taken from a caller-supplied candidate list
//!
//! Mutation candidates are the cells that are empty on the board the search
//! started from, not on the board a playout would reach. This keeps mutation
//! anchored to the real position.

use std::array;

use rand::{Rng, seq::IndexedRandom as _};
use tictoctoe_engine::Move;

/// Number of genes in a chromosome: one intention per cell.
pub const CHROMOSOME_LEN: usize = Move::COUNT;

/// A candidate sequence of nine intended moves.
///
/// Genes are not unique and not guaranteed to be legal when they are played.
///
/// # Example
///
/// ```
/// use tictoctoe_engine::Move;
/// use tictoctoe_search::chromosome::Chromosome;
///
/// let p1 = Chromosome::from_indices([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// let p2 = Chromosome::from_indices([8, 8, 8, 8, 8, 8, 8, 8, 8]).unwrap();
/// let child = Chromosome::crossover(&p1, &p2, 3);
/// assert_eq!(
///     child.genes().map(Move::index),
///     [0, 1, 2, 8, 8, 8, 8, 8, 8],
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: [Move; CHROMOSOME_LEN],
}

impl Chromosome {
    /// Builds a chromosome from raw cell indices.
    pub fn from_indices(
        indices: [usize; CHROMOSOME_LEN],
    ) -> Result<Self, tictoctoe_engine::InvalidMoveError> {
        let mut genes = [Move::ALL[0]; CHROMOSOME_LEN];
        for (gene, index) in genes.iter_mut().zip(indices) {
            *gene = Move::new(index)?;
        }
        Ok(Self { genes })
    }

    /// Creates a chromosome whose genes are independent uniform draws from
    /// `0..9`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let genes = array::from_fn(|_| Move::ALL[rng.random_range(0..Move::COUNT)]);
        Self { genes }
    }

    #[must_use]
    pub const fn genes(&self) -> [Move; CHROMOSOME_LEN] {
        self.genes
    }

    /// Combines two parents at `point`: genes `[0, point)` come from `p1`,
    /// genes `[point, 9)` from `p2`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is greater than [`CHROMOSOME_LEN`].
    #[must_use]
    pub fn crossover(p1: &Self, p2: &Self, point: usize) -> Self {
        assert!(point <= CHROMOSOME_LEN, "crossover point {point} out of range");
        let mut genes = p2.genes;
        genes[..point].copy_from_slice(&p1.genes[..point]);
        Self { genes }
    }

    /// Single-point crossover with the point drawn uniformly from `[1, 8]`.
    ///
    /// Both parents always contribute at least one gene.
    pub fn single_point_crossover<R>(p1: &Self, p2: &Self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let point = rng.random_range(1..CHROMOSOME_LEN);
        Self::crossover(p1, p2, point)
    }

    /// With probability `rate`, overwrites one uniformly chosen gene with a
    /// uniformly chosen entry of `candidates`.
    ///
    /// Returns whether a gene was replaced. Nothing happens when `candidates`
    /// is empty.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not in `[0, 1]`.
    pub fn mutate<R>(&mut self, rate: f32, candidates: &[Move], rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        if !rng.random_bool(rate.into()) {
            return false;
        }
        let gene = rng.random_range(0..CHROMOSOME_LEN);
        let Some(&replacement) = candidates.choose(rng) else {
            return false;
        };
        self.genes[gene] = replacement;
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn chromosome(indices: [usize; CHROMOSOME_LEN]) -> Chromosome {
        Chromosome::from_indices(indices).unwrap()
    }

    #[test]
    fn test_random_genes_cover_all_cells() {
        let mut rng = Pcg64::seed_from_u64(1);
        let mut seen = [false; CHROMOSOME_LEN];
        for _ in 0..100 {
            for gene in Chromosome::random(&mut rng).genes() {
                seen[gene.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some cell never drawn: {seen:?}");
    }

    #[test]
    fn test_crossover_splices_at_point() {
        let p1 = chromosome([0; CHROMOSOME_LEN]);
        let p2 = chromosome([1; CHROMOSOME_LEN]);
        for point in 0..=CHROMOSOME_LEN {
            let child = Chromosome::crossover(&p1, &p2, point);
            for (i, gene) in child.genes().iter().enumerate() {
                let expected = if i < point { 0 } else { 1 };
                assert_eq!(gene.index(), expected, "point {point}, gene {i}");
            }
        }
    }

    #[test]
    fn test_single_point_crossover_mixes_both_parents() {
        let mut rng = Pcg64::seed_from_u64(7);
        let p1 = chromosome([0; CHROMOSOME_LEN]);
        let p2 = chromosome([1; CHROMOSOME_LEN]);
        for _ in 0..200 {
            let child = Chromosome::single_point_crossover(&p1, &p2, &mut rng);
            let genes = child.genes();
            assert_eq!(genes[0].index(), 0, "first gene must come from p1");
            assert_eq!(genes[CHROMOSOME_LEN - 1].index(), 1, "last gene must come from p2");
        }
    }

    #[test]
    fn test_mutation_rate_bounds() {
        let mut rng = Pcg64::seed_from_u64(3);
        let candidates = [Move::new(4).unwrap()];
        let original = chromosome([0; CHROMOSOME_LEN]);

        let mut never = original;
        for _ in 0..100 {
            assert!(!never.mutate(0.0, &candidates, &mut rng));
        }
        assert_eq!(never, original);

        let mut always = original;
        assert!(always.mutate(1.0, &candidates, &mut rng));
        let changed: Vec<_> = always.genes().into_iter().filter(|g| g.index() == 4).collect();
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn test_mutation_uses_only_candidates() {
        let mut rng = Pcg64::seed_from_u64(11);
        let candidates = [Move::new(2).unwrap(), Move::new(6).unwrap()];
        let mut c = chromosome([0; CHROMOSOME_LEN]);
        for _ in 0..50 {
            c.mutate(1.0, &candidates, &mut rng);
        }
        for gene in c.genes() {
            assert!([0, 2, 6].contains(&gene.index()), "unexpected gene {gene}");
        }
    }

    #[test]
    fn test_mutation_without_candidates_is_noop() {
        let mut rng = Pcg64::seed_from_u64(5);
        let mut c = chromosome([3; CHROMOSOME_LEN]);
        assert!(!c.mutate(1.0, &[], &mut rng));
        assert_eq!(c, chromosome([3; CHROMOSOME_LEN]));
    }
}
