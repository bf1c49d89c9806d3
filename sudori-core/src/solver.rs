use crate::board::Board;
use log::trace;

/// Checks that `digit` can be placed at (row, col) without duplicating a
/// digit in the same row, column, or enclosing 3x3 box. Pure scan, no state.
pub fn is_safe(b: &Board, row: usize, col: usize, digit: u8) -> bool {
    for x in 0..9 {
        if b.cells[row][x] == digit || b.cells[x][col] == digit { return false; }
    }
    let br = row - row % 3;
    let bc = col - col % 3;
    for r in br..br + 3 {
        for c in bc..bc + 3 {
            if b.cells[r][c] == digit { return false; }
        }
    }
    true
}

/// Fills every empty cell by exhaustive backtracking: first empty cell in
/// row-major order, candidates tried 1..=9 ascending. Returns `true` with the
/// board completed, or `false` with every tentative placement undone, leaving
/// the board exactly as passed in. `false` means the given partial assignment
/// has no completion, never a fault.
pub fn solve(b: &mut Board) -> bool {
    let Some((r, c)) = find_empty(b) else { return true; };
    for d in 1..=9u8 {
        if is_safe(b, r, c, d) {
            b.cells[r][c] = d;
            if solve(b) { return true; }
            b.cells[r][c] = 0;
        }
    }
    trace!("backtrack at r{},c{}", r + 1, c + 1);
    false
}

fn find_empty(b: &Board) -> Option<(usize, usize)> {
    for r in 0..9 { for c in 0..9 { if b.cells[r][c] == 0 { return Some((r, c)); } }}
    None
}
