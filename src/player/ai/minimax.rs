use crate::core::{PlayerId, Position, TicTacToe};
use crate::logic::turn;
use crate::player::PlayerController;
use crate::solver::{self, Strategy};
use tracing::{info, warn};

pub struct MinimaxAI {
    pub player_id: PlayerId,
    pub name: String,
    pub strategy: Strategy,
}

impl MinimaxAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &TicTacToe, moves: &[Position]) -> Option<Position> {
        if moves.is_empty() {
            return None;
        }
        if turn(board) != self.player_id {
            warn!(
                ai = %self.name,
                expected = ?self.player_id,
                "asked to move out of turn"
            );
        }

        let report = solver::search(board, self.strategy);
        info!(
            ai = %self.name,
            strategy = %self.strategy,
            best_move = ?report.best_move,
            score = report.score,
            nodes = report.nodes,
            "AI chose move"
        );

        // 探索結果が候補外なら先頭の合法手
        report
            .best_move
            .filter(|mv| moves.contains(mv))
            .or_else(|| moves.first().copied())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::legal_moves;

    #[test]
    fn test_picks_winning_cell() {
        let board: TicTacToe = "XX./OO./...".parse().unwrap();
        for strategy in [
            Strategy::Minimax,
            Strategy::AlphaBeta,
            Strategy::Transposition,
        ] {
            let ai = MinimaxAI::new(PlayerId::Player1, "AI").with_strategy(strategy);
            assert_eq!(
                ai.choose_move(&board, &legal_moves(&board)),
                Some(Position::new(0, 2))
            );
        }
    }

    #[test]
    fn test_resigns_without_moves() {
        let board: TicTacToe = "XOX/XOO/OXX".parse().unwrap();
        let ai = MinimaxAI::new(PlayerId::Player2, "AI");
        assert_eq!(ai.choose_move(&board, &[]), None);
        assert!(!ai.is_human());
    }

    #[test]
    fn test_stays_within_offered_moves() {
        let board: TicTacToe = "XX./OO./...".parse().unwrap();
        let ai = MinimaxAI::new(PlayerId::Player1, "AI");
        let offered = [Position::new(2, 2)];
        assert_eq!(ai.choose_move(&board, &offered), Some(Position::new(2, 2)));
    }
}
