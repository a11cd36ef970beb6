use serde::{Deserialize, Serialize};

use crate::InvalidMoveError;

/// A cell index on the board, guaranteed to be in `0..9`.
///
/// A `Move` says nothing about legality: whether the cell is empty depends on
/// the board it is applied to.
///
/// # Example
///
/// ```
/// use tictoctoe_engine::Move;
///
/// let center = Move::new(4).unwrap();
/// assert_eq!(center.index(), 4);
/// assert_eq!((center.row(), center.column()), (1, 1));
/// assert!(Move::new(9).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{_0}")]
pub struct Move(u8);

impl Move {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// Every cell in index order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(0); Self::COUNT];
        let mut i: u8 = 0;
        while (i as usize) < Self::COUNT {
            all[i as usize] = Self(i);
            i += 1;
        }
        all
    };

    pub fn new(index: usize) -> Result<Self, InvalidMoveError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InvalidMoveError { index })
    }

    /// Builds a move from an index already known to be in range.
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT);
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.index() % 3
    }
}

impl TryFrom<u8> for Move {
    type Error = InvalidMoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl TryFrom<usize> for Move {
    type Error = InvalidMoveError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Move> for u8 {
    fn from(mv: Move) -> Self {
        mv.0
    }
}

impl From<Move> for usize {
    fn from(mv: Move) -> Self {
        mv.index()
    }
}
