use super::types::{PlayerId, Position};
use std::fmt;

/// 盤面
///
/// An `N`x`N` grid where each cell is empty (`None`) or holds a player's mark.
/// Boards are plain values: every rule in [`crate::logic`] takes a board by
/// reference and returns a new one, so a board is never modified after it has
/// been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = 3> {
    cells: [[Option<PlayerId>; N]; N],
}

/// The classic 3x3 game.
pub type TicTacToe = Board<3>;

impl<const N: usize> Board<N> {
    pub fn new() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }

    pub fn size(&self) -> usize {
        N
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < N && pos.col < N
    }

    /// 指定マスの印 (範囲外も `None`)
    pub fn get(&self, pos: Position) -> Option<PlayerId> {
        if self.contains(pos) {
            self.cells[pos.row][pos.col]
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[pos.row][pos.col].is_none()
    }

    /// Writes a mark without any rule checks. Callers go through
    /// [`crate::logic::apply_move`] or the board parser.
    pub(crate) fn place(&mut self, pos: Position, player: PlayerId) {
        self.cells[pos.row][pos.col] = Some(player);
    }

    pub fn count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == N * N
    }

    /// All coordinates in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..N).flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = cell.map(PlayerId::mark).unwrap_or('.');
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = TicTacToe::new();
        assert_eq!(board.filled(), 0);
        assert!(Board::<3>::positions().all(|p| board.is_empty_at(p)));
        assert_eq!(board, TicTacToe::default());
    }

    #[test]
    fn test_positions_are_row_major() {
        let positions: Vec<Position> = Board::<2>::positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_reads_as_empty_but_not_playable() {
        let board = TicTacToe::new();
        let outside = Position::new(3, 0);
        assert!(!board.contains(outside));
        assert_eq!(board.get(outside), None);
        assert!(!board.is_empty_at(outside));
    }

    #[test]
    fn test_display() {
        let mut board = TicTacToe::new();
        board.place(Position::new(0, 0), PlayerId::Player1);
        board.place(Position::new(1, 1), PlayerId::Player2);
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }
}
