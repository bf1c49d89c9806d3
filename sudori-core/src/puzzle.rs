use log::debug;
use rand::{seq::SliceRandom, SeedableRng};

use crate::board::Board;
use crate::{reveal, solver};

/// Produces solved, randomized boards. The backtracking fill is deterministic
/// on an empty board (candidates always tried 1..=9), so all variety comes
/// from the structure-preserving transforms applied afterwards.
pub struct PuzzleGenerator {
    rng: rand::rngs::StdRng,
}

impl PuzzleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_rng(rand::thread_rng()).unwrap(),
        };
        Self { rng }
    }

    /// Builds a complete valid board: solve an empty seed, permute rows inside
    /// each band, transpose, then relabel the digits with a random bijection.
    pub fn generate(&mut self) -> Board {
        let mut b = Board::empty();
        let solved = solver::solve(&mut b);
        debug_assert!(solved, "an empty board always has a solution");
        self.shuffle_band_rows(&mut b);
        transpose(&mut b);
        self.relabel_digits(&mut b);
        debug!("generated board:\n{}", b);
        b
    }

    /// Picks `count` distinct cells to reveal, on the generator's own RNG.
    pub fn select_reveals(&mut self, board: &Board, count: usize) -> Vec<(usize, usize)> {
        reveal::select(board, count, &mut self.rng)
    }

    // Rows never leave their band of 3, so each box keeps its row-set and
    // each column its value-set.
    fn shuffle_band_rows(&mut self, b: &mut Board) {
        for band in 0..3 {
            b.cells[band * 3..band * 3 + 3].shuffle(&mut self.rng);
        }
    }

    fn relabel_digits(&mut self, b: &mut Board) {
        let mut relabel: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        relabel.shuffle(&mut self.rng);
        for row in b.cells.iter_mut() {
            for v in row.iter_mut() {
                if *v != 0 { *v = relabel[(*v - 1) as usize]; }
            }
        }
    }
}

// Mirror across the main diagonal. Rows become columns and box (i,j) lands on
// box (j,i), so the band row shuffle above doubles as a stack column shuffle.
fn transpose(b: &mut Board) {
    for r in 0..9 {
        for c in r + 1..9 {
            let tmp = b.cells[r][c];
            b.cells[r][c] = b.cells[c][r];
            b.cells[c][r] = tmp;
        }
    }
}
