use crate::core::{PlayerId, Position, TicTacToe};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::warn;

pub struct TuiController {
    player_id: PlayerId,
    name: String,
}

impl TuiController {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
        }
    }

    fn read_move(
        &self,
        board: &TicTacToe,
        legal_moves: &[Position],
    ) -> std::io::Result<Option<Position>> {
        let mut state = DisplayState::default();
        state.show_cursor = true;
        state.highlights = legal_moves.to_vec();
        state.status_msg = Some(format!(
            "{}'s turn ({})",
            self.name,
            self.player_id.mark()
        ));
        state.footer =
            Some("[Arrows]: Move | [Enter/Space]: Place | [q]: Resign".to_string());

        // 初期カーソル位置を最初の空きマスに合わせる
        if let Some(&first) = legal_moves.first() {
            state.cursor = first;
        }

        let last = board.size() - 1;
        loop {
            render_board(board, &state)?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') => return Ok(None),
                KeyCode::Up => state.cursor.row = state.cursor.row.saturating_sub(1),
                KeyCode::Down => state.cursor.row = (state.cursor.row + 1).min(last),
                KeyCode::Left => state.cursor.col = state.cursor.col.saturating_sub(1),
                KeyCode::Right => state.cursor.col = (state.cursor.col + 1).min(last),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if legal_moves.contains(&state.cursor) {
                        return Ok(Some(state.cursor));
                    }
                    state.status_msg = Some(format!("{} is not empty", state.cursor));
                }
                _ => {}
            }
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &TicTacToe, legal_moves: &[Position]) -> Option<Position> {
        match self.read_move(board, legal_moves) {
            Ok(mv) => mv,
            Err(e) => {
                warn!(player = %self.name, error = %e, "terminal input failed, resigning");
                None
            }
        }
    }

    fn is_human(&self) -> bool {
        true
    }
}
