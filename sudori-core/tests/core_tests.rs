use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::HashSet;
use sudori_core::{reveal, solver, Board, PuzzleGenerator};

fn easy_puzzle() -> Board {
    // Known-solvable classic; 0 for blanks
    Board::from_rows([
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ])
}

// Locally consistent but uncompletable: (0,0) only admits 1 because of its
// row and the 9 below it, after which (0,8) has no candidate left (its row
// holds 1..=8 and its column already holds a 9).
fn unsolvable_puzzle() -> Board {
    let mut b = Board::from_rows([
        [0, 2, 3, 4, 5, 6, 7, 8, 0],
        [9, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
    ]);
    b.set(2, 8, 9);
    b
}

#[test]
fn solver_fills_empty_board() {
    let mut b = Board::empty();
    assert!(solver::solve(&mut b), "empty board must always solve");
    assert!(b.is_solved());
}

#[test]
fn solver_respects_givens() {
    let givens = easy_puzzle();
    let mut b = givens.clone();
    assert!(solver::solve(&mut b));
    assert!(b.is_solved());
    for (r, c) in givens.filled_cells() {
        assert_eq!(b.get(r, c), givens.get(r, c), "given at ({r},{c}) changed");
    }
}

#[test]
fn solver_rejects_unsolvable_and_leaves_board_unchanged() {
    let before = unsolvable_puzzle();
    assert!(before.is_valid(), "givens themselves must be consistent");
    let mut b = before.clone();
    assert!(!solver::solve(&mut b));
    assert_eq!(b, before, "failed solve must undo every tentative placement");
}

#[test]
fn is_safe_is_pure() {
    let b = easy_puzzle();
    let first = solver::is_safe(&b, 0, 2, 4);
    for _ in 0..10 {
        assert_eq!(solver::is_safe(&b, 0, 2, 4), first);
    }
    // duplicate in row
    assert!(!solver::is_safe(&b, 0, 2, 5));
    // duplicate in column
    assert!(!solver::is_safe(&b, 2, 0, 4));
    // duplicate in box
    assert!(!solver::is_safe(&b, 0, 2, 9));
}

#[test]
fn generated_boards_are_valid() {
    for seed in 0..100 {
        let b = PuzzleGenerator::new(Some(seed)).generate();
        assert!(b.is_solved(), "seed {seed} produced an invalid board:\n{b}");
    }
}

#[test]
fn generated_boards_vary() {
    let mut distinct = HashSet::new();
    for seed in 0..50 {
        distinct.insert(PuzzleGenerator::new(Some(seed)).generate());
    }
    assert!(distinct.len() >= 2, "50 seeds produced {} distinct boards", distinct.len());
}

#[test]
fn relabeling_preserves_validity() {
    let solved = PuzzleGenerator::new(Some(7)).generate();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let mut relabel: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        relabel.shuffle(&mut rng);
        let mut b = solved.clone();
        for r in 0..9 {
            for c in 0..9 {
                b.set(r, c, relabel[(b.get(r, c) - 1) as usize]);
            }
        }
        assert!(b.is_solved());
    }
}

#[test]
fn reveal_counts_are_exact_and_distinct() {
    let board = PuzzleGenerator::new(Some(42)).generate();
    let mut rng = StdRng::seed_from_u64(42);
    for k in [0usize, 1, 31, 81, 200] {
        let picked = reveal::select(&board, k, &mut rng);
        assert_eq!(picked.len(), k.min(81), "k = {k}");
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len(), "k = {k} produced duplicates");
        for &(r, c) in &picked {
            assert!(board.get(r, c) != 0, "revealed an empty cell at ({r},{c})");
        }
    }
}

#[test]
fn reveal_clamps_to_filled_cells() {
    // 5 filled cells, 10 requested
    let mut b = Board::empty();
    for c in 0..5 {
        b.set(0, c, c as u8 + 1);
    }
    let mut rng = StdRng::seed_from_u64(1);
    let picked = reveal::select(&b, 10, &mut rng);
    assert_eq!(picked.len(), 5);
}

#[test]
fn reveal_apply_blanks_hidden_cells() {
    let mut gen = PuzzleGenerator::new(Some(3));
    let board = gen.generate();
    let picked = gen.select_reveals(&board, 31);
    let masked = reveal::apply(&board, &picked);
    let shown = reveal::mask(&picked);
    for r in 0..9 {
        for c in 0..9 {
            if shown[r][c] {
                assert_eq!(masked.get(r, c), board.get(r, c));
            } else {
                assert_eq!(masked.get(r, c), 0);
            }
        }
    }
    assert!(masked.is_valid(), "a masked view of a valid board stays valid");
}

#[test]
fn board_serde_round_trip() {
    let b = PuzzleGenerator::new(Some(11)).generate();
    let json = serde_json::to_string(&b).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
}
