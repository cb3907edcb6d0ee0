use agent::{
    client::Client,
    strategy::{Cycle, OnlyPaper, OnlyRock, OnlyScissors, RandomMove, Strategy},
};
use common::model::{
    game::{Move, Objective},
    round::resolve_round,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    entrypoint::{OpponentConfig, SessionConfig},
    error::SessionError,
    model::internal::{GameMode, RoundSetup},
};

pub enum ObjectiveSource {
    Random(ChaCha8Rng),
    Scripted { objectives: Vec<Objective>, next: usize },
}

impl ObjectiveSource {
    pub fn scripted(objectives: Vec<Objective>) -> Option<Self> {
        if objectives.is_empty() {
            None
        } else {
            Some(ObjectiveSource::Scripted {
                objectives,
                next: 0,
            })
        }
    }

    fn next(&mut self) -> Objective {
        match self {
            ObjectiveSource::Random(rng) => rng.gen(),
            ObjectiveSource::Scripted { objectives, next } => {
                let objective = objectives[*next % objectives.len()];
                *next += 1;
                objective
            }
        }
    }
}

/// Samples the computer's side of every round.
pub struct Dealer {
    opponent: Client,
    objectives: ObjectiveSource,
}

impl Dealer {
    pub fn new(opponent: Client, objectives: ObjectiveSource) -> Self {
        Dealer {
            opponent,
            objectives,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        let strategy: Box<dyn Strategy> = match &config.opponent {
            OpponentConfig::Random => match config.seed {
                Some(seed) => Box::new(RandomMove::new(seed)),
                None => Box::new(RandomMove::from_entropy()),
            },
            OpponentConfig::OnlyRock => Box::new(OnlyRock {}),
            OpponentConfig::OnlyPaper => Box::new(OnlyPaper {}),
            OpponentConfig::OnlyScissors => Box::new(OnlyScissors {}),
            OpponentConfig::Cycle(moves) => Box::new(Cycle::new(moves.clone()).ok_or_else(
                || SessionError::InvalidConfig("opponent cycle must not be empty".to_owned()),
            )?),
        };
        let objectives = match &config.objectives {
            Some(objectives) => ObjectiveSource::scripted(objectives.clone()).ok_or_else(|| {
                SessionError::InvalidConfig("objective list must not be empty".to_owned())
            })?,
            None => {
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                // keep objectives independent of a seeded RandomMove opponent
                rng.set_stream(1);
                ObjectiveSource::Random(rng)
            }
        };
        Ok(Dealer::new(Client::new(strategy), objectives))
    }

    pub fn deal(&mut self, mode: GameMode) -> RoundSetup {
        let computer_move = self.opponent.play();
        let objective = match mode {
            GameMode::Classic => None,
            GameMode::Objective => Some(self.objectives.next()),
        };
        debug!(
            "Dealt {} with objective {:?}",
            computer_move,
            objective.map(|o| o.name())
        );
        RoundSetup {
            computer_move,
            objective,
        }
    }

    pub fn record(&mut self, setup: &RoundSetup, player_move: Move) {
        self.opponent
            .observe(player_move, resolve_round(player_move, setup.computer_move));
    }
}
