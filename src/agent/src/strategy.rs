use common::model::game::{Move, Outcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One finished round, as seen by the computer.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub my_move: Move,
    pub their_move: Move,
    pub outcome: Outcome,
}

pub trait Strategy {
    fn make_move(&mut self, history: &[Round]) -> Move;
}

// Trivial strategies
pub struct OnlyRock {}
impl Strategy for OnlyRock {
    fn make_move(&mut self, _: &[Round]) -> Move {
        Move::Rock
    }
}
pub struct OnlyPaper {}
impl Strategy for OnlyPaper {
    fn make_move(&mut self, _: &[Round]) -> Move {
        Move::Paper
    }
}
pub struct OnlyScissors {}
impl Strategy for OnlyScissors {
    fn make_move(&mut self, _: &[Round]) -> Move {
        Move::Scissors
    }
}

/// Replays a fixed, non-empty sequence of moves forever.
pub struct Cycle {
    moves: Vec<Move>,
}
impl Cycle {
    pub fn new(moves: Vec<Move>) -> Option<Self> {
        if moves.is_empty() {
            None
        } else {
            Some(Cycle { moves })
        }
    }
}
impl Strategy for Cycle {
    fn make_move(&mut self, history: &[Round]) -> Move {
        self.moves[history.len() % self.moves.len()]
    }
}

// Random
pub struct RandomMove {
    rng: ChaCha8Rng,
}
impl RandomMove {
    pub fn new(seed: u64) -> Self {
        RandomMove {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomMove {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}
impl Strategy for RandomMove {
    fn make_move(&mut self, _: &[Round]) -> Move {
        self.rng.gen()
    }
}
