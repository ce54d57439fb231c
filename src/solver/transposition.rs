use super::minimax::Evaluation;
use super::TwoPlayerGame;
use crate::core::PlayerId;
use std::collections::HashMap;
use std::hash::Hash;

/// 局面 → minimax 値 (常に正確な値のみ保存)
#[derive(Debug)]
pub struct TranspositionTable<G> {
    entries: HashMap<G, i32>,
    hits: u64,
}

impl<G: Eq + Hash> TranspositionTable<G> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }

    pub fn get(&mut self, state: &G) -> Option<i32> {
        let score = self.entries.get(state).copied();
        if score.is_some() {
            self.hits += 1;
        }
        score
    }

    pub fn store(&mut self, state: G, score: i32) {
        self.entries.insert(state, score);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }
}

impl<G: Eq + Hash> Default for TranspositionTable<G> {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimax that remembers the value of every state it has solved.
///
/// Only values are cached, never moves: the root still walks its successors
/// in order, so tie-breaking matches plain minimax.
#[derive(Debug)]
pub struct CachedMinimax<G> {
    table: TranspositionTable<G>,
    pub nodes: u64,
}

impl<G> CachedMinimax<G>
where
    G: TwoPlayerGame + Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            table: TranspositionTable::new(),
            nodes: 0,
        }
    }

    pub fn search(&mut self, state: &G) -> Evaluation<G::Move> {
        self.nodes += 1;
        if let Some(score) = state.utility() {
            return Evaluation::leaf(score);
        }

        let maximizing = state.to_move() == PlayerId::Player1;
        let mut best = Evaluation::leaf(if maximizing { i32::MIN } else { i32::MAX });
        for (mv, next) in state.successors() {
            let score = self.value(&next);
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if best.best_move.is_none() || improves {
                best = Evaluation {
                    best_move: Some(mv),
                    score,
                };
            }
        }
        self.table.store(state.clone(), best.score);
        best
    }

    fn value(&mut self, state: &G) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.table.get(state) {
            return score;
        }

        let score = match state.utility() {
            Some(score) => score,
            None => {
                let children = state.successors().into_iter().map(|(_, next)| next);
                let mut values = Vec::new();
                for next in children {
                    values.push(self.value(&next));
                }
                let extreme = match state.to_move() {
                    PlayerId::Player1 => values.into_iter().max(),
                    PlayerId::Player2 => values.into_iter().min(),
                };
                // 非終局で合法手なしは TwoPlayerGame の契約違反
                extreme.unwrap_or(0)
            }
        };
        self.table.store(state.clone(), score);
        score
    }

    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    pub fn hits(&self) -> u64 {
        self.table.hits()
    }
}

impl<G> Default for CachedMinimax<G>
where
    G: TwoPlayerGame + Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, TicTacToe};
    use crate::logic::initial_state;

    #[test]
    fn test_table_tracks_hits() {
        let mut table = TranspositionTable::new();
        let board = initial_state();
        assert_eq!(table.get(&board), None);
        table.store(board, 0);
        assert_eq!(table.get(&board), Some(0));
        assert_eq!(table.hits(), 1);
        assert_eq!(table.len(), 1);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.hits(), 0);
    }

    #[test]
    fn test_caches_all_reachable_states_from_empty_board() {
        let mut searcher = CachedMinimax::new();
        let eval = searcher.search(&initial_state());
        assert_eq!(eval.best_move, Some(Position::new(0, 0)));
        assert_eq!(eval.score, 0);
        // 5478 legal positions
        assert_eq!(searcher.table_len(), 5478);
        assert!(searcher.hits() > 0);
    }

    #[test]
    fn test_block_scenario() {
        let board: TicTacToe = "X../OO./.X.".parse().unwrap();
        let eval = CachedMinimax::new().search(&board);
        assert_eq!(eval.best_move, Some(Position::new(1, 2)));
    }
}
