pub mod board;
pub mod setup;
pub mod types;

pub use board::{Board, TicTacToe};
pub use setup::setup_from_strings;
pub use types::{Outcome, PlayerId, Position};
