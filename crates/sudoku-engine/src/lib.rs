pub mod board;
pub mod difficulty;
pub mod error;
pub mod puzzle;
pub mod session;
pub mod validation;

pub use board::{Board, Cell, Grid};
pub use difficulty::Difficulty;
pub use error::EngineError;
pub use puzzle::{generate_full_board, generate_puzzle, is_valid, remove_cells, solve};
pub use session::{Hint, Session};
