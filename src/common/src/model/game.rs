use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Draw,
    PlayerWins,
    ComputerWins,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// `None` when both moves are the same, otherwise whether `self` wins.
    pub fn beats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::UnknownMove(trimmed.to_owned()))
    }
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

/// What the player is rewarded for this round: beating the computer or losing to it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Win,
    Lose,
}

impl Objective {
    pub const ALL: [Objective; 2] = [Objective::Win, Objective::Lose];

    pub fn name(&self) -> &'static str {
        match self {
            Objective::Win => "win",
            Objective::Lose => "lose",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Objective::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::UnknownObjective(trimmed.to_owned()))
    }
}

impl Distribution<Objective> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Objective {
        if rng.gen_bool(0.5) {
            Objective::Win
        } else {
            Objective::Lose
        }
    }
}
