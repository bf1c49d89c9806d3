pub mod board;
pub mod puzzle;
pub mod reveal;
pub mod solver;

pub use board::Board;
pub use puzzle::PuzzleGenerator;
