use common::{
    model::{
        game::Move,
        messages::Id,
        round::{resolve_round, resolve_scored_round, Score},
    },
    test::RequestHandler,
};
use tracing::{debug, info, warn};

use crate::model::{
    external::{PlayerRequest, SessionResponse},
    internal::{GameMode, RoundSetup},
};

use super::dealer::Dealer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: Score,
    pub rounds_played: u32,
}

struct SessionState {
    phase: SessionPhase,
    score: Score,
    rounds_played: u32,
}

impl SessionState {
    pub fn new(setup: RoundSetup) -> Self {
        SessionState {
            phase: SessionPhase::AwaitingMove { setup },
            score: Score::default(),
            rounds_played: 0,
        }
    }

    pub fn with_phase(&self, phase: SessionPhase) -> Self {
        SessionState {
            phase,
            score: self.score,
            rounds_played: self.rounds_played,
        }
    }
}

enum SessionPhase {
    AwaitingMove { setup: RoundSetup },
    Done,
}

pub struct GameSession {
    id: Id,
    mode: GameMode,
    dealer: Dealer,
    state: SessionState,
}

impl GameSession {
    pub fn new(mode: GameMode, mut dealer: Dealer) -> Self {
        let id = Id::new();
        let setup = dealer.deal(mode);
        info!("Session {} started in {:?} mode", id, mode);
        GameSession {
            id,
            mode,
            dealer,
            state: SessionState::new(setup),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state.phase, SessionPhase::Done)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.state.score,
            rounds_played: self.state.rounds_played,
        }
    }

    fn round_started(setup: &RoundSetup) -> SessionResponse {
        SessionResponse::RoundStarted {
            computer_move: setup.computer_move,
            objective: setup.objective,
        }
    }

    fn play(&mut self, setup: RoundSetup, player_move: Move) -> Vec<SessionResponse> {
        let computer_move = setup.computer_move;
        let result = match setup.objective {
            Some(objective) => {
                let score = resolve_scored_round(
                    player_move,
                    computer_move,
                    objective,
                    self.state.score,
                );
                let scored = score > self.state.score;
                debug!(
                    "{} vs {} aiming to {}: scored={}",
                    player_move, computer_move, objective, scored
                );
                self.state.score = score;
                SessionResponse::ObjectiveResult {
                    player_move,
                    computer_move,
                    objective,
                    scored,
                    score,
                }
            }
            None => {
                let outcome = resolve_round(player_move, computer_move);
                debug!("{} vs {}: {:?}", player_move, computer_move, outcome);
                SessionResponse::ClassicResult {
                    player_move,
                    computer_move,
                    outcome,
                }
            }
        };
        self.state.rounds_played += 1;
        self.dealer.record(&setup, player_move);

        // Deal the next round straight away
        let next = self.dealer.deal(self.mode);
        self.state = self
            .state
            .with_phase(SessionPhase::AwaitingMove { setup: next });
        vec![result, Self::round_started(&next)]
    }

    fn end(&mut self) -> Vec<SessionResponse> {
        let summary = self.summary();
        info!(
            "Session {} ended with score {} after {} rounds",
            self.id, summary.score, summary.rounds_played
        );
        self.state = self.state.with_phase(SessionPhase::Done);
        vec![SessionResponse::SessionEnded {
            score: summary.score,
            rounds_played: summary.rounds_played,
        }]
    }
}

impl RequestHandler<PlayerRequest, SessionResponse> for GameSession {
    fn open(&mut self) -> Vec<SessionResponse> {
        match self.state.phase {
            SessionPhase::AwaitingMove { ref setup } => vec![Self::round_started(setup)],
            SessionPhase::Done => vec![],
        }
    }

    fn handle(&mut self, request: PlayerRequest) -> Vec<SessionResponse> {
        let setup = match self.state.phase {
            SessionPhase::AwaitingMove { setup } => setup,
            SessionPhase::Done => {
                warn!("Got {:?} after session {} ended", request, self.id);
                return vec![];
            }
        };
        match request {
            PlayerRequest::Move { value } => self.play(setup, value),
            PlayerRequest::Status => {
                let summary = self.summary();
                vec![SessionResponse::Status {
                    score: summary.score,
                    rounds_played: summary.rounds_played,
                }]
            }
            PlayerRequest::Quit => self.end(),
        }
    }
}
