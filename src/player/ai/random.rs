use crate::core::{Position, TicTacToe};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Same seed, same sequence of moves.
    pub fn with_seed(name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &TicTacToe, legal_moves: &[Position]) -> Option<Position> {
        legal_moves.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{initial_state, legal_moves};

    #[test]
    fn test_only_picks_legal_moves() {
        let board: TicTacToe = "X.O/.X./O..".parse().unwrap();
        let moves = legal_moves(&board);
        let ai = RandomAI::with_seed("Random AI", 7);
        for _ in 0..50 {
            let mv = ai.choose_move(&board, &moves).unwrap();
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let board = initial_state();
        let moves = legal_moves(&board);
        let a = RandomAI::with_seed("a", 42);
        let b = RandomAI::with_seed("b", 42);
        let picks_a: Vec<_> = (0..10).map(|_| a.choose_move(&board, &moves)).collect();
        let picks_b: Vec<_> = (0..10).map(|_| b.choose_move(&board, &moves)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_no_moves_means_resign() {
        let ai = RandomAI::new("Random AI");
        assert_eq!(ai.choose_move(&initial_state(), &[]), None);
    }
}
