use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// `X` always moves first. The signed representation (`+1` for `X`, `−1` for
/// `O`, `0` for an empty cell) is what [`Board::from_signs`] and
/// [`Board::to_signs`] exchange with callers.
///
/// [`Board::from_signs`]: crate::Board::from_signs
/// [`Board::to_signs`]: crate::Board::to_signs
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    /// The side that moves first in every game and every simulated playout.
    pub const FIRST: Self = Self::X;

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::X => 1,
            Self::O => -1,
        }
    }

    /// Converts a signed cell value into a player.
    ///
    /// Returns `None` for `0` (empty) and for any value outside `{-1, 0, 1}`.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Self::X),
            -1 => Some(Self::O),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}
