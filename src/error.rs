//! Error types for the tic-tac-toe engine

use crate::core::Position;
use thiserror::Error;

/// Why a move was rejected by [`crate::logic::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    Occupied,
    OutOfBounds { size: usize },
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IllegalMoveReason::Occupied => write!(f, "cell is already occupied"),
            IllegalMoveReason::OutOfBounds { size } => {
                write!(f, "outside the {size}x{size} board")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move at {position}: {reason}")]
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },

    #[error("utility is only defined for a finished game")]
    NotTerminal,

    #[error("expected {expected} rows, got {got}")]
    InvalidRowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid mark counts: X={x_count}, O={o_count} (X must equal O or lead by 1)")]
    InvalidMarkCounts { x_count: usize, o_count: usize },
}

impl GameError {
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove { .. })
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
