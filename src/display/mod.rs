use crate::core::{Position, TicTacToe};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
    pub footer: Option<String>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::new(1, 1),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: false,
            footer: None,
        }
    }
}

/// raw mode 前提なので改行は `\r\n`
pub fn render_board(board: &TicTacToe, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(out, "=== Tic-Tac-Toe AI ===\r\n")?;
    match &state.status_msg {
        Some(msg) => write!(out, "{}\r\n", msg.clone().bold().yellow())?,
        None => write!(out, "\r\n")?,
    }
    write!(out, "\r\n")?;

    let size = board.size();
    write!(out, "    ")?;
    for col in 0..size {
        write!(out, "  {} ", col)?;
    }
    write!(out, "\r\n")?;

    let separator = format!("    +{}\r\n", "---+".repeat(size));
    write!(out, "{}", separator)?;

    for row in 0..size {
        write!(out, "  {} |", row)?;
        for col in 0..size {
            let pos = Position::new(row, col);
            let mark = board.get(pos);
            let ch = mark.map(|p| p.mark()).unwrap_or('.');

            let is_cursor = state.show_cursor && state.cursor == pos;
            let (prefix, suffix) = if is_cursor { ("[", "]") } else { (" ", " ") };
            let cell_text = format!("{}{}{}", prefix, ch, suffix);

            if is_cursor {
                write!(out, "{}", cell_text.yellow())?;
            } else if state.last_move == Some(pos) {
                write!(out, "{}", cell_text.red())?;
            } else if state.highlights.contains(&pos) {
                write!(out, "{}", cell_text.green())?;
            } else if let Some(p) = mark {
                if p == crate::core::PlayerId::Player1 {
                    write!(out, "{}", cell_text.cyan())?;
                } else {
                    write!(out, "{}", cell_text.magenta())?;
                }
            } else {
                write!(out, "{}", cell_text)?;
            }
            write!(out, "|")?;
        }
        write!(out, "\r\n{}", separator)?;
    }

    if let Some(footer) = &state.footer {
        write!(out, "\r\n{}\r\n", footer)?;
    }
    out.flush()
}
