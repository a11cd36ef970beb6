use std::io::{BufRead, Write};

use anyhow::{Context as _, bail};
use tictoctoe_engine::{Game, GameRecord, GameState, Move, Player};

use crate::agent::Agent;

const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try again.";
const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a number.";
const DRAW_MESSAGE: &str = "It's a draw!";
const YOU_WIN_MESSAGE: &str = "You win! Congratulations!";
const YOU_LOSE_MESSAGE: &str = "You lose! Better luck next time.";

/// Line-oriented game in a terminal.
///
/// X is always a human typing cell numbers `1`-`9`. O is a second human, or
/// `opponent` when one is given.
pub(super) struct TextSession<R, W> {
    input: R,
    output: W,
    opponent: Option<Box<dyn Agent>>,
    game: Game,
}

impl<R, W> TextSession<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(super) fn new(input: R, output: W, opponent: Option<Box<dyn Agent>>) -> Self {
        Self {
            input,
            output,
            opponent,
            game: Game::new(),
        }
    }

    /// Plays until the game ends and returns its record.
    ///
    /// Fails if the input ends before the game does.
    pub(super) fn run(mut self) -> anyhow::Result<GameRecord> {
        loop {
            let player = self.game.to_move();
            let mv = match (player, &mut self.opponent) {
                (Player::O, Some(agent)) => {
                    let mv = agent.select_move(&self.game);
                    log::debug!("engine plays cell {}", mv.index() + 1);
                    mv
                }
                _ => {
                    self.print_board()?;
                    self.read_human_move(player)?
                }
            };

            let state = self.game.play(mv)?;
            if let Some(message) = self.end_message(state) {
                self.print_board()?;
                writeln!(self.output, "{message}")?;
                self.output.flush()?;
                return Ok(self.game.record());
            }
        }
    }

    fn end_message(&self, state: GameState) -> Option<String> {
        let with_ai = self.opponent.is_some();
        let message = match state {
            GameState::InProgress => return None,
            GameState::Draw => DRAW_MESSAGE.to_owned(),
            GameState::Won(Player::X) if with_ai => YOU_WIN_MESSAGE.to_owned(),
            GameState::Won(Player::O) if with_ai => YOU_LOSE_MESSAGE.to_owned(),
            GameState::Won(player) => format!("Player {player} wins! Congratulations!"),
        };
        Some(message)
    }

    fn print_board(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.game.board())?;
        Ok(())
    }

    fn read_human_move(&mut self, player: Player) -> anyhow::Result<Move> {
        let mut line = String::new();
        loop {
            write!(self.output, "Player {player}, Enter your move (1-9): ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move from input")?;
            if read == 0 {
                bail!("input ended before the game finished");
            }

            let Ok(number) = line.trim().parse::<i64>() else {
                writeln!(self.output, "{INVALID_INPUT_MESSAGE}")?;
                continue;
            };
            let mv = usize::try_from(number)
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| Move::new(index).ok())
                .filter(|&mv| self.game.is_legal(mv));
            match mv {
                Some(mv) => return Ok(mv),
                None => writeln!(self.output, "{INVALID_MOVE_MESSAGE}")?,
            }
        }
    }
}
