//! Winning lines of an `N`x`N` board.

use crate::core::{Board, PlayerId, Position};

/// 勝ち筋の列挙: 全行、全列、対角線2本の順。
///
/// The order is part of the contract: [`super::winner`] reports the first
/// line it finds.
pub fn lines<const N: usize>() -> impl Iterator<Item = [Position; N]> {
    let rows = (0..N).map(|row| line::<N, _>(|col| Position::new(row, col)));
    let cols = (0..N).map(|col| line::<N, _>(|row| Position::new(row, col)));
    let main_diagonal = std::iter::once(line::<N, _>(|i| Position::new(i, i)));
    let anti_diagonal = std::iter::once(line::<N, _>(|i| Position::new(i, N - 1 - i)));

    rows.chain(cols).chain(main_diagonal).chain(anti_diagonal)
}

fn line<const N: usize, F: FnMut(usize) -> Position>(cell: F) -> [Position; N] {
    std::array::from_fn(cell)
}

/// The mark filling every cell of `line`, if there is one.
pub fn line_owner<const N: usize>(board: &Board<N>, line: &[Position; N]) -> Option<PlayerId> {
    let first = board.get(*line.first()?)?;
    line.iter()
        .all(|&pos| board.get(pos) == Some(first))
        .then_some(first)
}
