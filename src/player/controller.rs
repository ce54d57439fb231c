use crate::core::{Position, TicTacToe};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// Picks one of `legal_moves`. `None` means the player resigns.
    fn choose_move(&self, board: &TicTacToe, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
    /// Whether moves come from a person at the keyboard.
    fn is_human(&self) -> bool {
        false
    }
}
