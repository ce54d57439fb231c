use super::minimax::Evaluation;
use super::TwoPlayerGame;
use crate::core::PlayerId;

/// Minimax with alpha-beta pruning.
///
/// Fail-soft: a score at or below `alpha` is an upper bound, one at or above
/// `beta` a lower bound. A move is adopted only on strict improvement, so the
/// root picks the same move as [`super::minimax::Minimax`].
#[derive(Debug, Default)]
pub struct AlphaBeta {
    pub nodes: u64,
}

impl AlphaBeta {
    pub fn search<G: TwoPlayerGame>(&mut self, state: &G) -> Evaluation<G::Move> {
        match state.to_move() {
            PlayerId::Player1 => self.max_value(state, i32::MIN, i32::MAX),
            PlayerId::Player2 => self.min_value(state, i32::MIN, i32::MAX),
        }
    }

    fn max_value<G: TwoPlayerGame>(
        &mut self,
        state: &G,
        mut alpha: i32,
        beta: i32,
    ) -> Evaluation<G::Move> {
        self.nodes += 1;
        if let Some(score) = state.utility() {
            return Evaluation::leaf(score);
        }

        let mut best = Evaluation::leaf(i32::MIN);
        for (mv, next) in state.successors() {
            let score = self.min_value(&next, alpha, beta).score;
            if best.best_move.is_none() || score > best.score {
                best = Evaluation {
                    best_move: Some(mv),
                    score,
                };
            }
            if best.score >= beta {
                break; // Beta cut
            }
            alpha = alpha.max(best.score);
        }
        best
    }

    fn min_value<G: TwoPlayerGame>(
        &mut self,
        state: &G,
        alpha: i32,
        mut beta: i32,
    ) -> Evaluation<G::Move> {
        self.nodes += 1;
        if let Some(score) = state.utility() {
            return Evaluation::leaf(score);
        }

        let mut best = Evaluation::leaf(i32::MAX);
        for (mv, next) in state.successors() {
            let score = self.max_value(&next, alpha, beta).score;
            if best.best_move.is_none() || score < best.score {
                best = Evaluation {
                    best_move: Some(mv),
                    score,
                };
            }
            if best.score <= alpha {
                break; // Alpha cut
            }
            beta = beta.min(best.score);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, TicTacToe};

    #[test]
    fn test_forced_win_and_block() {
        let win: TicTacToe = "XX./OO./...".parse().unwrap();
        assert_eq!(
            AlphaBeta::default().search(&win).best_move,
            Some(Position::new(0, 2))
        );

        let block: TicTacToe = "X../OO./.X.".parse().unwrap();
        let eval = AlphaBeta::default().search(&block);
        assert_eq!(eval.best_move, Some(Position::new(1, 2)));
        assert_eq!(eval.score, 0);
    }

    #[test]
    fn test_second_player_win() {
        let board: TicTacToe = "XX./OO./X..".parse().unwrap();
        let eval = AlphaBeta::default().search(&board);
        assert_eq!(eval.best_move, Some(Position::new(1, 2)));
        assert_eq!(eval.score, -1);
    }
}
