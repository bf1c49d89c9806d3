use rand::{seq::SliceRandom, Rng};

use crate::board::Board;

/// Picks `count` distinct cells to reveal, uniformly at random among the
/// board's non-zero cells: collect the filled coordinates, shuffle, take the
/// first `count`. Oversized requests are truncated to the cells available, so
/// selection terminates for any `count`.
pub fn select(board: &Board, count: usize, rng: &mut impl Rng) -> Vec<(usize, usize)> {
    let mut coords = board.filled_cells();
    coords.shuffle(rng);
    coords.truncate(count);
    coords
}

/// Per-cell visibility lookup for renderers.
pub fn mask(reveals: &[(usize, usize)]) -> [[bool; 9]; 9] {
    let mut m = [[false; 9]; 9];
    for &(r, c) in reveals { m[r][c] = true; }
    m
}

/// The playable view of a solved board: revealed cells keep their digit,
/// everything else is blanked to 0.
pub fn apply(board: &Board, reveals: &[(usize, usize)]) -> Board {
    let mut masked = Board::empty();
    for &(r, c) in reveals {
        masked.cells[r][c] = board.cells[r][c];
    }
    masked
}
