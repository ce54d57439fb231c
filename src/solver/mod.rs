//! Exhaustive adversarial search for two-player, zero-sum, perfect-information
//! games.
//!
//! `Player1` maximizes the utility and `Player2` minimizes it. Every strategy
//! here returns the same move for the same state: among equally good moves the
//! first one in successor order wins.

pub mod alpha_beta;
pub mod minimax;
pub mod transposition;

pub use minimax::{best_move, max_value, min_value, Evaluation};

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

/// A game the solver can search.
pub trait TwoPlayerGame: Sized {
    type Move: Copy + Eq + fmt::Debug;

    /// Side to move. `Player1` is the maximizer.
    fn to_move(&self) -> PlayerId;

    /// Legal moves paired with the state they lead to, in a fixed order.
    fn successors(&self) -> Vec<(Self::Move, Self)>;

    fn is_terminal(&self) -> bool;

    /// Payoff from `Player1`'s point of view. `Some` exactly when the state is
    /// terminal.
    fn utility(&self) -> Option<i32>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Full game tree, no pruning.
    #[default]
    Minimax,
    AlphaBeta,
    /// Minimax with a per-search table of already solved states.
    Transposition,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Transposition => "transposition",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<M> {
    pub best_move: Option<M>,
    /// Game value under optimal play.
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Runs one search with the chosen strategy.
///
/// A terminal state yields no move and its utility as the score.
pub fn search<G>(state: &G, strategy: Strategy) -> SearchReport<G::Move>
where
    G: TwoPlayerGame + Clone + Eq + Hash,
{
    let start = Instant::now();

    let (evaluation, nodes) = match strategy {
        Strategy::Minimax => {
            let mut searcher = minimax::Minimax::default();
            let evaluation = searcher.search(state);
            (evaluation, searcher.nodes)
        }
        Strategy::AlphaBeta => {
            let mut searcher = alpha_beta::AlphaBeta::default();
            let evaluation = searcher.search(state);
            (evaluation, searcher.nodes)
        }
        Strategy::Transposition => {
            let mut searcher = transposition::CachedMinimax::new();
            let evaluation = searcher.search(state);
            debug!(
                entries = searcher.table_len(),
                hits = searcher.hits(),
                "transposition table stats"
            );
            (evaluation, searcher.nodes)
        }
    };

    let report = SearchReport {
        best_move: evaluation.best_move,
        score: evaluation.score,
        nodes,
        elapsed: start.elapsed(),
    };
    debug!(
        %strategy,
        best_move = ?report.best_move,
        score = report.score,
        nodes = report.nodes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "search finished"
    );
    report
}
