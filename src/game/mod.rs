use crate::core::{Outcome, PlayerId, Position, TicTacToe};
use crate::display::{render_board, DisplayState};
use crate::logic::{apply_move, is_terminal, legal_moves, outcome, turn};
use crate::player::PlayerController;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub outcome: Outcome,
    pub moves: Vec<Position>,
    /// Set when a player gave up instead of moving.
    pub resigned: Option<PlayerId>,
}

impl MatchResult {
    pub fn winner(&self) -> Option<PlayerId> {
        match self.resigned {
            Some(loser) => Some(loser.opponent()),
            None => self.outcome.winner(),
        }
    }
}

/// 対局の進行。手番は盤面から導出するので保持しない。
pub struct Game {
    pub board: TicTacToe,
    pub history: Vec<Position>,
    pub think_delay: Duration,
}

impl Game {
    pub fn new(board: TicTacToe) -> Self {
        Game {
            board,
            history: Vec::new(),
            think_delay: Duration::ZERO,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        turn(&self.board)
    }

    fn controller<'a>(
        &self,
        p1: &'a dyn PlayerController,
        p2: &'a dyn PlayerController,
    ) -> &'a dyn PlayerController {
        match self.current_player() {
            PlayerId::Player1 => p1,
            PlayerId::Player2 => p2,
        }
    }

    /// Asks the side to move for a move and applies it.
    ///
    /// Returns `Ok(None)` if the player resigned. A move outside the legal set
    /// is an error.
    pub fn step(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<Option<Position>> {
        let player = self.current_player();
        let controller = self.controller(p1, p2);
        let moves = legal_moves(&self.board);

        let Some(mv) = controller.choose_move(&self.board, &moves) else {
            info!(player = %player, name = controller.name(), "player resigned");
            return Ok(None);
        };

        self.board = apply_move(&self.board, mv).with_context(|| {
            format!("{} ({}) played an illegal move", controller.name(), player)
        })?;
        self.history.push(mv);
        debug!(player = %player, mv = %mv, "move applied");
        Ok(Some(mv))
    }

    fn result(&self, resigned: Option<PlayerId>) -> MatchResult {
        MatchResult {
            outcome: outcome(&self.board),
            moves: self.history.clone(),
            resigned,
        }
    }

    /// Plays to the end without touching the terminal.
    pub fn play_silent(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<MatchResult> {
        while !is_terminal(&self.board) {
            let player = self.current_player();
            if self.step(p1, p2)?.is_none() {
                return Ok(self.result(Some(player)));
            }
        }
        let result = self.result(None);
        info!(outcome = %result.outcome, moves = result.moves.len(), "game over");
        Ok(result)
    }

    /// Interactive loop: render → choose → apply → check for the end.
    pub fn play(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<MatchResult> {
        let mut resigned = None;

        while !is_terminal(&self.board) {
            let player = self.current_player();
            let controller = self.controller(p1, p2);

            if !controller.is_human() {
                // 思考中の盤面を描画
                let mut state = DisplayState::default();
                state.last_move = self.history.last().copied();
                state.status_msg = Some(format!(
                    "{} ({}) is thinking...",
                    controller.name(),
                    player
                ));
                render_board(&self.board, &state)?;

                // 思考ウェイト中に終了判定
                if event::poll(self.think_delay)? {
                    if let Event::Key(key) = event::read()? {
                        if key.code == KeyCode::Char('q') {
                            info!("interrupted by user");
                            resigned = Some(player);
                            break;
                        }
                    }
                }
            }

            if self.step(p1, p2)?.is_none() {
                resigned = Some(player);
                break;
            }
        }

        let result = self.result(resigned);
        let message = match result.resigned {
            Some(loser) => format!("{} resigned. {} wins!", loser, loser.opponent()),
            None => format!("Game over: {}", result.outcome),
        };
        info!(
            outcome = %result.outcome,
            moves = result.moves.len(),
            resigned = ?result.resigned,
            "game over"
        );

        let mut state = DisplayState::default();
        state.last_move = self.history.last().copied();
        state.status_msg = Some(message);
        state.footer = Some("Press any key to continue".to_string());
        render_board(&self.board, &state)?;
        wait_for_key()?;

        Ok(result)
    }
}

fn wait_for_key() -> std::io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::initial_state;
    use crate::player::{MinimaxAI, RandomAI};

    /// Plays a fixed list of moves, then resigns.
    struct Scripted {
        moves: std::cell::RefCell<Vec<Position>>,
    }

    impl Scripted {
        fn new(moves: &[(usize, usize)]) -> Self {
            let mut moves: Vec<Position> =
                moves.iter().map(|&(r, c)| Position::new(r, c)).collect();
            moves.reverse();
            Scripted {
                moves: std::cell::RefCell::new(moves),
            }
        }
    }

    impl PlayerController for Scripted {
        fn choose_move(&self, _board: &TicTacToe, _legal: &[Position]) -> Option<Position> {
            self.moves.borrow_mut().pop()
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_minimax_self_play_draws() {
        let p1 = MinimaxAI::new(PlayerId::Player1, "X AI");
        let p2 = MinimaxAI::new(PlayerId::Player2, "O AI");
        let mut game = Game::new(initial_state());
        let result = game.play_silent(&p1, &p2).unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.moves.len(), 9);
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_scripted_win_for_x() {
        let p1 = Scripted::new(&[(0, 0), (0, 1), (0, 2)]);
        let p2 = Scripted::new(&[(1, 0), (1, 1)]);
        let mut game = Game::new(initial_state());
        let result = game.play_silent(&p1, &p2).unwrap();
        assert_eq!(result.outcome, Outcome::Player1Wins);
        assert_eq!(result.winner(), Some(PlayerId::Player1));
        assert_eq!(result.moves.len(), 5);
    }

    #[test]
    fn test_resignation_hands_win_to_opponent() {
        let p1 = Scripted::new(&[(0, 0)]);
        let p2 = Scripted::new(&[(1, 1)]);
        let mut game = Game::new(initial_state());
        let result = game.play_silent(&p1, &p2).unwrap();
        assert_eq!(result.resigned, Some(PlayerId::Player1));
        assert_eq!(result.outcome, Outcome::InProgress);
        assert_eq!(result.winner(), Some(PlayerId::Player2));
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let p1 = Scripted::new(&[(0, 0), (1, 1)]);
        let p2 = Scripted::new(&[(0, 0)]);
        let mut game = Game::new(initial_state());
        let err = game.play_silent(&p1, &p2).unwrap_err();
        let cause = err.downcast_ref::<crate::GameError>().unwrap();
        assert!(cause.is_illegal_move());
        assert_eq!(game.history, vec![Position::new(0, 0)]);
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        for seed in 0..5 {
            let ai = MinimaxAI::new(PlayerId::Player2, "O AI")
                .with_strategy(crate::solver::Strategy::AlphaBeta);
            let random = RandomAI::with_seed("Random", seed);
            let mut game = Game::new(initial_state());
            let result = game.play_silent(&random, &ai).unwrap();
            assert_ne!(result.winner(), Some(PlayerId::Player1), "seed {}", seed);
        }
    }
}
