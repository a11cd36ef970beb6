use std::ops::ControlFlow;

use arrayvec::ArrayVec;
use rand::Rng;
use tictoctoe_engine::{Board, Move, Player};

use crate::{
    config::SearchConfig,
    genetic::{FitnessStats, Individual, Population, PopulationEvolver},
    move_eval::{self, MoveScore},
};

/// The side [`search`] plays.
pub const DEFAULT_SEARCH_PLAYER: Player = Player::O;

/// State of the search after one generation has been evaluated.
#[derive(Debug)]
pub struct GenerationReport<'a> {
    /// Zero-based generation number.
    pub generation: usize,
    pub population: &'a Population,
    pub stats: FitnessStats,
    /// First individual with the maximum fitness; carried into the next
    /// generation unchanged.
    pub best: &'a Individual,
}

/// Receives a [`GenerationReport`] after each generation's fitness
/// evaluation.
///
/// Returning [`ControlFlow::Break`] ends evolution before the next generation
/// is bred; the move is still selected. Observers that always continue leave
/// the result and the random draws of the search unchanged.
pub trait SearchObserver {
    fn on_generation(&mut self, report: &GenerationReport<'_>) -> ControlFlow<()>;
}

impl<F> SearchObserver for F
where
    F: FnMut(&GenerationReport<'_>) -> ControlFlow<()>,
{
    fn on_generation(&mut self, report: &GenerationReport<'_>) -> ControlFlow<()> {
        self(report)
    }
}

/// Observer that never interrupts the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Everything a search produced besides the move itself.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Selected cell; always empty on the searched board.
    pub chosen: Move,
    /// Score of every empty cell, in index order.
    pub scores: ArrayVec<(Move, MoveScore), { Move::COUNT }>,
    /// Best individual of the last evaluated generation, if any ran.
    pub best: Option<Individual>,
    /// Number of generations whose fitness was evaluated.
    pub generations: usize,
}

/// Chooses a move for [`DEFAULT_SEARCH_PLAYER`] on `board`.
///
/// # Panics
///
/// Panics if `board` has no empty cell.
///
/// # Example
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use tictoctoe_engine::Board;
/// use tictoctoe_search::{SearchConfig, search};
///
/// let board: Board = "XX.OO....".parse().unwrap();
/// let mut rng = Pcg64::seed_from_u64(0);
/// let mv = search(&board, &SearchConfig::default(), &mut rng);
/// assert_eq!(mv.index(), 5);
/// ```
pub fn search<R>(board: &Board, config: &SearchConfig, rng: &mut R) -> Move
where
    R: Rng + ?Sized,
{
    search_as(board, DEFAULT_SEARCH_PLAYER, config, rng)
}

/// Chooses a move for `player` on `board`.
///
/// # Panics
///
/// Panics if `board` has no empty cell.
pub fn search_as<R>(board: &Board, player: Player, config: &SearchConfig, rng: &mut R) -> Move
where
    R: Rng + ?Sized,
{
    search_with_observer(board, player, config, rng, &mut NoopObserver).chosen
}

/// Runs the full search for `player` and reports every generation to
/// `observer`.
///
/// `board` is only read; every playout works on its own copy.
///
/// # Panics
///
/// Panics if `board` has no empty cell.
pub fn search_with_observer<R, O>(
    board: &Board,
    player: Player,
    config: &SearchConfig,
    rng: &mut R,
    observer: &mut O,
) -> SearchOutcome
where
    R: Rng + ?Sized,
    O: SearchObserver + ?Sized,
{
    let empty_cells = board.empty_cells();
    assert!(
        !empty_cells.is_empty(),
        "search requires a board with at least one empty cell"
    );

    let evolver = PopulationEvolver {
        mutation_rate: config.mutation_rate(),
    };
    let mut population = Population::random(config.population_size(), rng);
    let mut best = None;
    let mut generations = 0;

    for generation in 0..config.generations() {
        population.evaluate_fitness(board, player);
        generations += 1;

        let (Some(stats), Some(best_ind)) =
            (population.fitness_stats(), population.best_individual())
        else {
            unreachable!("configured population is never empty");
        };
        log::debug!(
            "generation #{generation}: fitness min={} max={} mean={:.2}",
            stats.min,
            stats.max,
            stats.mean
        );
        best = Some(best_ind.clone());

        let report = GenerationReport {
            generation,
            population: &population,
            stats,
            best: best_ind,
        };
        if observer.on_generation(&report).is_break() {
            log::debug!("search stopped by observer after generation #{generation}");
            break;
        }

        population = evolver.evolve(&population, &empty_cells, rng);
    }

    let scores = move_eval::score_moves(board, player);
    let chosen = move_eval::first_best(&scores).expect("board has an empty cell");
    log::debug!(
        "move scores for {player}: {}",
        scores
            .iter()
            .map(|(mv, score)| format!("{mv}={score}"))
            .collect::<Vec<_>>()
            .join(" ")
    );
    log::info!("{player} plays {chosen} after {generations} generations");

    SearchOutcome {
        chosen,
        scores,
        best,
        generations,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn small_config() -> SearchConfig {
        SearchConfig::new(20, 5, 0.1).unwrap()
    }

    #[test]
    fn test_win_is_preferred_over_block() {
        let b = Board::from_signs([1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        let mv = search(&b, &SearchConfig::default(), &mut rng);
        assert_eq!(mv.index(), 5);
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        let b = board("XX..O....");
        let mut rng = Pcg64::seed_from_u64(2);
        assert_eq!(search(&b, &small_config(), &mut rng).index(), 2);
    }

    #[test]
    fn test_empty_board_returns_valid_cell() {
        let mut rng = Pcg64::seed_from_u64(3);
        let mv = search(&Board::EMPTY, &small_config(), &mut rng);
        assert!(mv.index() < 9);
    }

    #[test]
    fn test_single_empty_cell_is_returned() {
        let configs = [
            SearchConfig::new(1, 0, 0.0).unwrap(),
            SearchConfig::new(5, 3, 1.0).unwrap(),
            SearchConfig::default(),
        ];
        for hole in Move::ALL {
            let mut b = Board::EMPTY;
            for mv in Move::ALL.into_iter().filter(|&mv| mv != hole) {
                let player = if mv.index() % 2 == 0 { Player::X } else { Player::O };
                b.place(mv, player);
            }
            for config in &configs {
                let mut rng = Pcg64::seed_from_u64(4);
                assert_eq!(search(&b, config, &mut rng), hole);
                assert_eq!(search_as(&b, Player::X, config, &mut rng), hole);
            }
        }
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let boards = [
            "X........",
            "X...O....",
            "XO..X....",
            "XOX.O.X..",
            "XOXOXO...",
            "OXOXOX.X.",
        ];
        for (seed, text) in boards.iter().enumerate() {
            let b = board(text);
            let mut rng = Pcg64::seed_from_u64(seed as u64);
            for player in Player::ALL {
                let mv = search_as(&b, player, &small_config(), &mut rng);
                assert!(b.is_empty_at(mv), "{player} picked occupied {mv} on {text}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let b = board("X...O...X");
        let config = small_config();
        let run = |seed| {
            let mut rng = Pcg64::seed_from_u64(seed);
            let outcome = search_with_observer(&b, Player::O, &config, &mut rng, &mut NoopObserver);
            (outcome.chosen, outcome.best)
        };
        assert_eq!(run(17), run(17));
    }

    #[test]
    fn test_max_fitness_never_decreases() {
        let b = board("X...O....");
        let config = SearchConfig::new(30, 20, 0.3).unwrap();
        let mut rng = Pcg64::seed_from_u64(5);
        let mut max_history = Vec::new();
        let mut observer = |report: &GenerationReport<'_>| {
            assert_eq!(report.best.fitness(), report.stats.max);
            max_history.push(report.stats.max);
            ControlFlow::Continue(())
        };
        let outcome = search_with_observer(&b, Player::O, &config, &mut rng, &mut observer);
        assert_eq!(outcome.generations, 20);
        assert_eq!(max_history.len(), 20);
        assert!(
            max_history.is_sorted(),
            "max fitness decreased: {max_history:?}"
        );
    }

    #[test]
    fn test_observer_can_stop_between_generations() {
        let b = board("X........");
        let config = SearchConfig::new(10, 50, 0.1).unwrap();
        let mut rng = Pcg64::seed_from_u64(6);
        let mut seen = 0;
        let mut observer = |report: &GenerationReport<'_>| {
            seen += 1;
            if report.generation == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let outcome = search_with_observer(&b, Player::O, &config, &mut rng, &mut observer);
        assert_eq!(seen, 3);
        assert_eq!(outcome.generations, 3);
        assert!(b.is_empty_at(outcome.chosen));
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let b = board("XO..X....");
        let config = small_config();
        let mut rng = Pcg64::seed_from_u64(8);
        let plain = search_as(&b, Player::O, &config, &mut rng);
        let mut rng = Pcg64::seed_from_u64(8);
        let mut observer = |_: &GenerationReport<'_>| ControlFlow::Continue(());
        let observed = search_with_observer(&b, Player::O, &config, &mut rng, &mut observer);
        assert_eq!(plain, observed.chosen);
    }

    #[test]
    fn test_zero_generations_still_selects() {
        let b = board("XX.OO....");
        let config = SearchConfig::new(3, 0, 0.1).unwrap();
        let mut rng = Pcg64::seed_from_u64(9);
        let outcome = search_with_observer(&b, Player::O, &config, &mut rng, &mut NoopObserver);
        assert_eq!(outcome.generations, 0);
        assert!(outcome.best.is_none());
        assert_eq!(outcome.chosen.index(), 5);
        assert_eq!(outcome.scores.len(), 5);
    }

    #[test]
    #[should_panic(expected = "at least one empty cell")]
    fn test_full_board_panics() {
        let b = board("XOXXOOOXX");
        let mut rng = Pcg64::seed_from_u64(10);
        let _ = search(&b, &small_config(), &mut rng);
    }
}
