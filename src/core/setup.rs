use super::board::Board;
use super::types::{PlayerId, Position};
use crate::error::{GameError, Result};
use std::str::FromStr;

/// 文字列配列から盤面を初期化する
///
/// Each string is one row: `X`/`x` for the first player, `O`/`o` for the
/// second, and `.`, `_`, `-` or a space for an empty cell. The result must be
/// reachable by alternating play, i.e. X has as many marks as O or exactly one
/// more.
pub fn setup_from_strings<const N: usize>(rows: &[&str]) -> Result<Board<N>> {
    if rows.len() != N {
        return Err(GameError::InvalidRowCount {
            expected: N,
            got: rows.len(),
        });
    }

    let mut board = Board::<N>::new();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != N {
            return Err(GameError::InvalidRowLength {
                row,
                expected: N,
                got: cells.len(),
            });
        }
        for (col, c) in cells.into_iter().enumerate() {
            let owner = match c {
                'X' | 'x' => PlayerId::Player1,
                'O' | 'o' => PlayerId::Player2,
                '.' | '_' | '-' | ' ' => continue,
                other => {
                    return Err(GameError::InvalidCellCharacter {
                        character: other,
                        row,
                        col,
                    })
                }
            };
            board.place(Position::new(row, col), owner);
        }
    }

    let x_count = board.count(PlayerId::Player1);
    let o_count = board.count(PlayerId::Player2);
    if x_count != o_count && x_count != o_count + 1 {
        return Err(GameError::InvalidMarkCounts { x_count, o_count });
    }

    Ok(board)
}

impl<const N: usize> FromStr for Board<N> {
    type Err = GameError;

    /// Rows separated by `/` or newlines, e.g. `"X.O/.X./..O"`.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(|r| r.trim_end_matches('\r'))
            .filter(|r| !r.is_empty())
            .collect();
        setup_from_strings(&rows)
    }
}
