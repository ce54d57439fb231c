pub mod lines;

use crate::core::{Board, Outcome, PlayerId, Position, TicTacToe};
use crate::error::{GameError, IllegalMoveReason, Result};
use crate::solver::TwoPlayerGame;

/// 初期盤面 (全マス空)
pub fn initial_state() -> TicTacToe {
    TicTacToe::new()
}

/// 手番は盤面の印の数から導出する
///
/// X moves when both sides have the same number of marks, otherwise O.
pub fn turn<const N: usize>(board: &Board<N>) -> PlayerId {
    if board.count(PlayerId::Player1) == board.count(PlayerId::Player2) {
        PlayerId::Player1
    } else {
        PlayerId::Player2
    }
}

/// 合法手生成 (row-major)
pub fn legal_moves<const N: usize>(board: &Board<N>) -> Vec<Position> {
    Board::<N>::positions()
        .filter(|&pos| board.is_empty_at(pos))
        .collect()
}

/// 移動適用
///
/// Returns a new board with the side to move's mark at `mv`. The input board
/// is left untouched.
pub fn apply_move<const N: usize>(board: &Board<N>, mv: Position) -> Result<Board<N>> {
    if !board.contains(mv) {
        return Err(GameError::IllegalMove {
            position: mv,
            reason: IllegalMoveReason::OutOfBounds { size: N },
        });
    }
    if !board.is_empty_at(mv) {
        return Err(GameError::IllegalMove {
            position: mv,
            reason: IllegalMoveReason::Occupied,
        });
    }
    Ok(place_for_turn(board, mv))
}

fn place_for_turn<const N: usize>(board: &Board<N>, mv: Position) -> Board<N> {
    let mut next = *board;
    next.place(mv, turn(board));
    next
}

/// Rows first, then columns, then the two diagonals.
pub fn winner<const N: usize>(board: &Board<N>) -> Option<PlayerId> {
    lines::lines::<N>().find_map(|line| lines::line_owner(board, &line))
}

pub fn is_terminal<const N: usize>(board: &Board<N>) -> bool {
    winner(board).is_some() || board.is_full()
}

pub fn outcome<const N: usize>(board: &Board<N>) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::from(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// +1 if X won, -1 if O won, 0 for a draw.
pub fn utility<const N: usize>(board: &Board<N>) -> Result<i32> {
    match outcome(board) {
        Outcome::Player1Wins => Ok(1),
        Outcome::Player2Wins => Ok(-1),
        Outcome::Draw => Ok(0),
        Outcome::InProgress => Err(GameError::NotTerminal),
    }
}

impl<const N: usize> TwoPlayerGame for Board<N> {
    type Move = Position;

    fn to_move(&self) -> PlayerId {
        turn(self)
    }

    fn successors(&self) -> Vec<(Position, Self)> {
        legal_moves(self)
            .into_iter()
            .map(|mv| (mv, place_for_turn(self, mv)))
            .collect()
    }

    fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    fn utility(&self) -> Option<i32> {
        utility(self).ok()
    }
}
