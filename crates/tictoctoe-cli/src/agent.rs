use rand::{Rng, seq::IndexedRandom as _};
use tictoctoe_engine::{Game, Move};
use tictoctoe_search::{SearchConfig, search_as};

/// Something that picks moves for one side of a [`Game`].
pub trait Agent {
    /// Picks a legal move for [`Game::to_move`].
    ///
    /// Only called while the game is in progress.
    fn select_move(&mut self, game: &Game) -> Move;
}

/// Moves chosen by the genetic-algorithm search.
#[derive(Debug)]
pub struct EngineAgent<R> {
    config: SearchConfig,
    rng: R,
}

impl<R> EngineAgent<R> {
    pub fn new(config: SearchConfig, rng: R) -> Self {
        Self { config, rng }
    }
}

impl<R> Agent for EngineAgent<R>
where
    R: Rng,
{
    fn select_move(&mut self, game: &Game) -> Move {
        search_as(game.board(), game.to_move(), &self.config, &mut self.rng)
    }
}

/// Uniformly random legal moves.
#[derive(Debug)]
pub struct RandomAgent<R> {
    rng: R,
}

impl<R> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Agent for RandomAgent<R>
where
    R: Rng,
{
    fn select_move(&mut self, game: &Game) -> Move {
        *game
            .board()
            .empty_cells()
            .choose(&mut self.rng)
            .expect("game in progress has an empty cell")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use tictoctoe_engine::{Board, Player};

    use super::*;

    #[test]
    fn test_random_agent_picks_empty_cells() {
        let mut agent = RandomAgent::new(Pcg64::seed_from_u64(0));
        let mut game = Game::new();
        while game.state().is_in_progress() {
            let mv = agent.select_move(&game);
            assert!(game.is_legal(mv));
            game.play(mv).unwrap();
        }
        assert!(!game.history().is_empty());
    }

    #[test]
    fn test_engine_agent_plays_side_to_move() {
        // X to move can win on cell 2; O to move must block it.
        let board: Board = "XX..O....".parse().unwrap();
        let config = SearchConfig::new(10, 3, 0.1).unwrap();
        let mut agent = EngineAgent::new(config, Pcg64::seed_from_u64(1));

        let game = Game::from_board(board, Player::X);
        assert_eq!(agent.select_move(&game).index(), 2);
        let game = Game::from_board(board, Player::O);
        assert_eq!(agent.select_move(&game).index(), 2);
    }
}
