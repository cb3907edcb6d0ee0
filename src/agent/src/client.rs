use common::model::game::{Move, Outcome};
use tracing::debug;

use crate::strategy::{Round, Strategy};

/// The computer's seat at the table: a strategy plus everything it has seen so far.
pub struct Client {
    strategy: Box<dyn Strategy>,
    history: Vec<Round>,
    last_move: Option<Move>,
}

impl Client {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Client {
            strategy,
            history: Vec::new(),
            last_move: None,
        }
    }

    pub fn play(&mut self) -> Move {
        let next_move = self.strategy.make_move(&self.history);
        self.last_move = Some(next_move);
        next_move
    }

    /// Records the player's answer to the last move played. Ignored if nothing was played.
    pub fn observe(&mut self, their_move: Move, outcome: Outcome) {
        let Some(my_move) = self.last_move.take() else {
            debug!("Observed {} without a pending move", their_move);
            return;
        };
        self.history.push(Round {
            my_move,
            their_move,
            outcome,
        });
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }
}
