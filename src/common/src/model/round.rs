use std::fmt;

use serde::{Deserialize, Serialize};

use super::game::{Move, Objective, Outcome};

/// Points earned in objective mode. Only ever grows, one point per scoring round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    pub fn new(points: u32) -> Self {
        Score(points)
    }

    pub fn points(&self) -> u32 {
        self.0
    }

    fn incremented(self) -> Self {
        Score(self.0.saturating_add(1))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classic round: who won, from the player's side of the table.
pub fn resolve_round(player: Move, computer: Move) -> Outcome {
    match player.beats(&computer) {
        None => Outcome::Draw,
        Some(true) => Outcome::PlayerWins,
        Some(false) => Outcome::ComputerWins,
    }
}

/// Whether the player earns a point. A "lose" objective only pays out when the
/// player is on the losing side of the standard matchup; draws never score.
pub fn scores(player: Move, computer: Move, objective: Objective) -> bool {
    matches!(
        (player, computer, objective),
        (Move::Paper, Move::Rock, Objective::Win)
            | (Move::Scissors, Move::Paper, Objective::Win)
            | (Move::Rock, Move::Scissors, Objective::Win)
            | (Move::Scissors, Move::Rock, Objective::Lose)
            | (Move::Rock, Move::Paper, Objective::Lose)
            | (Move::Paper, Move::Scissors, Objective::Lose)
    )
}

pub fn resolve_scored_round(
    player: Move,
    computer: Move,
    objective: Objective,
    score: Score,
) -> Score {
    if scores(player, computer, objective) {
        score.incremented()
    } else {
        score
    }
}
