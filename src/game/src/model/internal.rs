use common::model::game::{Move, Objective};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Plain rock-paper-scissors; rounds are reported, nothing is scored.
    Classic,
    /// Each round carries a win/lose objective and meeting it scores a point.
    #[default]
    Objective,
}

/// Everything sampled before the player picks a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSetup {
    pub computer_move: Move,
    pub objective: Option<Objective>,
}
