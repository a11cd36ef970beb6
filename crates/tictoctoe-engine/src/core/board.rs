use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{InvalidCellError, ParseBoardError};

use super::{lines::WINNING_LINES, moves::Move, player::Player};

const EMPTY_CHAR: char = '.';
const ROW_SEPARATOR: &str = "--------";
const CELL_SEPARATOR: &str = " | ";

/// The 3×3 board: nine cells in row-major order, each empty or owned by a
/// [`Player`].
///
/// `Board` is a plain `Copy` value. Simulations take a copy, play on it and
/// drop it, so a snapshot handed to a search engine is never modified.
///
/// The board does not enforce piece counts or turn order; [`Game`] does that
/// for real games, while simulated playouts deliberately skip occupied cells
/// instead.
///
/// # Text formats
///
/// - [`Display`](fmt::Display) prints the grid for humans:
///
///   ```text
///   X | O |
///   --------
///     | X |
///   --------
///     |   | O
///   ```
///
/// - [`to_compact_string`](Self::to_compact_string) and [`FromStr`] use nine
///   characters, `X`, `O` or `.`, e.g. `"XO..X...O"`. Parsing also accepts
///   lowercase marks and `-`/`_` for empty cells, and ignores whitespace, `|`,
///   `/` and `,` so that `"XO./.X./..O"` is valid. This compact form is also
///   the serde representation.
///
/// [`Game`]: crate::Game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Player>; Move::COUNT],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [None; Move::COUNT],
    };

    /// Builds a board from the signed representation (`1` = X, `-1` = O,
    /// `0` = empty).
    pub fn from_signs(signs: [i8; Move::COUNT]) -> Result<Self, InvalidCellError> {
        let mut board = Self::EMPTY;
        for (index, (cell, value)) in board.cells.iter_mut().zip(signs).enumerate() {
            *cell = match value {
                0 => None,
                _ => Some(Player::from_sign(value).ok_or(InvalidCellError { index, value })?),
            };
        }
        Ok(board)
    }

    #[must_use]
    pub fn to_signs(&self) -> [i8; Move::COUNT] {
        self.cells.map(|cell| cell.map_or(0, Player::sign))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, mv: Move) -> Option<Player> {
        self.cells[mv.index()]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty_at(&self, mv: Move) -> bool {
        self.cells[mv.index()].is_none()
    }

    /// Puts `player`'s mark on `mv`.
    ///
    /// The cell is overwritten without checking; callers that need rule
    /// enforcement go through [`Game::play`](crate::Game::play).
    #[inline]
    pub fn place(&mut self, mv: Move, player: Player) {
        self.cells[mv.index()] = Some(player);
    }

    /// Returns a copy of this board with `player`'s mark on `mv`.
    #[must_use]
    pub fn with_move(mut self, mv: Move, player: Player) -> Self {
        self.place(mv, player);
        self
    }

    /// Returns `true` if all three cells of any winning line belong to
    /// `player`.
    #[must_use]
    pub fn check_winner(&self, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&mv| self.get(mv) == Some(player)))
    }

    /// Returns the player owning a complete line, if any.
    ///
    /// `X` is reported first when (on an illegal board) both players own one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.check_winner(p))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the empty cells in index order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<Move, { Move::COUNT }> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.is_empty_at(mv))
            .collect()
    }

    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    #[must_use]
    pub fn to_compact_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(EMPTY_CHAR, Player::as_char))
            .collect()
    }
}

/// Returns `true` if `player` owns a complete line on `board`.
///
/// Shorthand for [`Board::check_winner`], used by turn loops after every move.
#[must_use]
pub fn check_winner(board: &Board, player: Player) -> bool {
    board.check_winner(player)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f, "{ROW_SEPARATOR}")?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    f.write_str(CELL_SEPARATOR)?;
                }
                write!(f, "{}", cell.map_or(' ', Player::as_char))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = ArrayVec::<Option<Player>, { Move::COUNT }>::new();
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                '.' | '-' | '_' => None,
                '|' | '/' | ',' => continue,
                ch if ch.is_whitespace() => continue,
                ch => Some(Player::from_char(ch).ok_or(ParseBoardError::InvalidChar(ch))?),
            };
            count += 1;
            // Keep counting past nine cells to report the real length.
            let _ = cells.try_push(cell);
        }
        let cells = cells
            .into_inner()
            .map_err(|_| ParseBoardError::WrongLength(count))?;
        if count != Move::COUNT {
            return Err(ParseBoardError::WrongLength(count));
        }
        Ok(Self { cells })
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid board {s:?}: {e}")))
    }
}
