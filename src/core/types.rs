use serde::{Deserialize, Serialize};
use std::fmt;

/// プレイヤーID
///
/// `Player1` (X) always moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1, // X (先手)
    Player2, // O (後手)
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    pub fn mark(self) -> char {
        match self {
            PlayerId::Player1 => 'X',
            PlayerId::Player2 => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// 盤面座標 (0-indexed)。三目並べでは指し手そのもの。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a game, always recomputed from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Draw,
    Player1Wins,
    Player2Wins,
}

impl Outcome {
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Player1Wins => Some(PlayerId::Player1),
            Outcome::Player2Wins => Some(PlayerId::Player2),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl From<PlayerId> for Outcome {
    fn from(winner: PlayerId) -> Self {
        match winner {
            PlayerId::Player1 => Outcome::Player1Wins,
            PlayerId::Player2 => Outcome::Player2Wins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Player1Wins => write!(f, "X wins"),
            Outcome::Player2Wins => write!(f, "O wins"),
        }
    }
}
