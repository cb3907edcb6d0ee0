use common::model::{
    game::{Move, Objective, Outcome},
    round::Score,
};
use serde::{Deserialize, Serialize};

// Player types
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum PlayerRequest {
    Move { value: Move },
    Status,
    Quit,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum SessionResponse {
    RoundStarted {
        computer_move: Move,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        objective: Option<Objective>,
    },
    ClassicResult {
        player_move: Move,
        computer_move: Move,
        outcome: Outcome,
    },
    ObjectiveResult {
        player_move: Move,
        computer_move: Move,
        objective: Objective,
        scored: bool,
        score: Score,
    },
    Status {
        score: Score,
        rounds_played: u32,
    },
    SessionEnded {
        score: Score,
        rounds_played: u32,
    },
    InvalidRequest {
        reason: String,
    },
}
