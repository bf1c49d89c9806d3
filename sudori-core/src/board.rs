use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A 9x9 Sudoku board. 0 marks an empty cell, 1..=9 a placed digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[u8; 9]; 9],
}

impl Board {
    pub fn empty() -> Self { Self { cells: [[0; 9]; 9] } }

    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self { Self { cells: rows } }

    pub fn get(&self, r: usize, c: usize) -> u8 { self.cells[r][c] }
    pub fn set(&mut self, r: usize, c: usize, v: u8) { self.cells[r][c] = v; }

    /// No duplicate non-zero digit in any row, column, or 3x3 box. Zeros are
    /// ignored, so a partially filled board can be valid.
    pub fn is_valid(&self) -> bool {
        for r in 0..9 { if !no_dupes(self.row_values(r)) { return false; } }
        for c in 0..9 { if !no_dupes(self.col_values(c)) { return false; } }
        for br in 0..3 { for bc in 0..3 { if !no_dupes(self.box_values(br, bc)) { return false; } }}
        true
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&v| v != 0)) && self.is_valid()
    }

    pub fn row_values(&self, r: usize) -> [u8; 9] { self.cells[r] }
    pub fn col_values(&self, c: usize) -> [u8; 9] { let mut a=[0;9]; for r in 0..9 { a[r]=self.cells[r][c]; } a }
    pub fn box_values(&self, br: usize, bc: usize) -> [u8; 9] {
        let mut a=[0;9];
        let mut i=0;
        for r in br*3..br*3+3 { for c in bc*3..bc*3+3 { a[i]=self.cells[r][c]; i+=1; }}
        a
    }

    /// Coordinates of every non-zero cell, row-major.
    pub fn filled_cells(&self) -> Vec<(usize, usize)> {
        let mut v = Vec::with_capacity(81);
        for r in 0..9 { for c in 0..9 { if self.cells[r][c] != 0 { v.push((r, c)); } }}
        v
    }
}

fn no_dupes(vals: [u8; 9]) -> bool {
    let mut seen = [false; 10];
    for v in vals { if v != 0 { if seen[v as usize] { return false; } seen[v as usize] = true; }}
    true
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r % 3 == 0 { writeln!(f, "+-------+-------+-------+")?; }
            for c in 0..9 {
                if c % 3 == 0 { write!(f, "| ")?; }
                let v = self.cells[r][c];
                write!(f, "{} ", if v == 0 { '·' } else { char::from(b'0' + v) })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+-------+-------+-------+")
    }
}
