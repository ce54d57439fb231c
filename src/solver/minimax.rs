use super::TwoPlayerGame;
use crate::core::PlayerId;

/// The move chosen at a node together with the node's minimax value.
///
/// `best_move` is `None` for terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation<M> {
    pub best_move: Option<M>,
    pub score: i32,
}

impl<M> Evaluation<M> {
    pub fn leaf(score: i32) -> Self {
        Evaluation {
            best_move: None,
            score,
        }
    }
}

/// Plain minimax over the whole game tree.
#[derive(Debug, Default)]
pub struct Minimax {
    pub nodes: u64,
}

impl Minimax {
    pub fn search<G: TwoPlayerGame>(&mut self, state: &G) -> Evaluation<G::Move> {
        match state.to_move() {
            PlayerId::Player1 => self.max_value(state),
            PlayerId::Player2 => self.min_value(state),
        }
    }

    pub fn max_value<G: TwoPlayerGame>(&mut self, state: &G) -> Evaluation<G::Move> {
        self.nodes += 1;
        if let Some(score) = state.utility() {
            return Evaluation::leaf(score);
        }

        let mut best = Evaluation::leaf(i32::MIN);
        for (mv, next) in state.successors() {
            let score = self.min_value(&next).score;
            // 同点なら先に見つけた手を残す
            if best.best_move.is_none() || score > best.score {
                best = Evaluation {
                    best_move: Some(mv),
                    score,
                };
            }
        }
        best
    }

    pub fn min_value<G: TwoPlayerGame>(&mut self, state: &G) -> Evaluation<G::Move> {
        self.nodes += 1;
        if let Some(score) = state.utility() {
            return Evaluation::leaf(score);
        }

        let mut best = Evaluation::leaf(i32::MAX);
        for (mv, next) in state.successors() {
            let score = self.max_value(&next).score;
            if best.best_move.is_none() || score < best.score {
                best = Evaluation {
                    best_move: Some(mv),
                    score,
                };
            }
        }
        best
    }
}

/// Optimal move for the side to move, or `None` if the game is already over.
pub fn best_move<G: TwoPlayerGame>(state: &G) -> Option<G::Move> {
    if state.is_terminal() {
        return None;
    }
    Minimax::default().search(state).best_move
}

pub fn max_value<G: TwoPlayerGame>(state: &G) -> Evaluation<G::Move> {
    Minimax::default().max_value(state)
}

pub fn min_value<G: TwoPlayerGame>(state: &G) -> Evaluation<G::Move> {
    Minimax::default().min_value(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, TicTacToe};
    use crate::logic::{apply_move, initial_state, is_terminal, utility};

    fn board(s: &str) -> TicTacToe {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // X: 2 in row 0, O threatens row 1 as well
        assert_eq!(best_move(&board("XX./OO./...")), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let state = board("X../OO./.X.");
        assert_eq!(best_move(&state), Some(Position::new(1, 2)));
        assert_eq!(max_value(&state).score, 0);
    }

    #[test]
    fn test_second_player_takes_win() {
        assert_eq!(best_move(&board("XX./OO./X..")), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_second_player_answers_corner_with_center() {
        let eval = min_value(&board("X../.../..."));
        assert_eq!(eval.best_move, Some(Position::new(1, 1)));
        assert_eq!(eval.score, 0);
    }

    #[test]
    fn test_terminal_state_has_no_move() {
        let won = board("XXX/OO./...");
        assert_eq!(best_move(&won), None);
        assert_eq!(max_value(&won), Evaluation::leaf(1));
        assert_eq!(min_value(&won), Evaluation::leaf(1));

        let drawn = board("XOX/XOO/OXX");
        assert_eq!(best_move(&drawn), None);
        assert_eq!(max_value(&drawn).score, 0);
    }

    #[test]
    fn test_ties_keep_first_move_in_row_major_order() {
        // 空盤面では全手が引き分け
        let eval = max_value(&initial_state());
        assert_eq!(eval.best_move, Some(Position::new(0, 0)));
        assert_eq!(eval.score, 0);
    }

    #[test]
    fn test_optimal_self_play_is_a_draw() {
        let mut state = initial_state();
        let mut history = Vec::new();
        while !is_terminal(&state) {
            let mv = best_move(&state).expect("non-terminal state has a move");
            history.push(mv);
            state = apply_move(&state, mv).unwrap();
        }
        assert_eq!(history.len(), 9);
        assert_eq!(
            history,
            vec![
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        assert_eq!(utility(&state), Ok(0));
    }

    #[test]
    fn test_counts_every_node_of_the_full_tree() {
        let mut searcher = Minimax::default();
        searcher.max_value(&initial_state());
        assert_eq!(searcher.nodes, 549_946);
    }
}
