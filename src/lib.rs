pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;
pub mod solver;


pub use error::{GameError, Result};
