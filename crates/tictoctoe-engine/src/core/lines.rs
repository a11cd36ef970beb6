use super::moves::Move;

const fn line(a: u8, b: u8, c: u8) -> [Move; 3] {
    [
        Move::from_index_unchecked(a),
        Move::from_index_unchecked(b),
        Move::from_index_unchecked(c),
    ]
}

/// The eight lines that win the game: three rows, three columns and two
/// diagonals.
pub const WINNING_LINES: [[Move; 3]; 8] = [
    // rows
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    // columns
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    // diagonals
    line(0, 4, 8),
    line(2, 4, 6),
];
