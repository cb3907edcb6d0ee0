use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
    str::FromStr,
};

use common::{
    model::game::{Move, Objective},
    test::RequestHandler,
};
use itertools::Itertools;
use serde::Deserialize;
use tracing::{info, info_span, warn, Level};

use crate::{
    error::SessionError,
    model::{
        external::{PlayerRequest, SessionResponse},
        internal::GameMode,
    },
    service::{
        dealer::Dealer,
        session::{GameSession, SessionSummary},
    },
};

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentConfig {
    #[default]
    Random,
    OnlyRock,
    OnlyPaper,
    OnlyScissors,
    Cycle(Vec<Move>),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub mode: GameMode,
    /// Seeds every generator in the session; `None` draws from the OS.
    pub seed: Option<u64>,
    pub opponent: OpponentConfig,
    /// Replaces random objectives with this list, repeated.
    pub objectives: Option<Vec<Objective>>,
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: GameMode::default(),
            seed: None,
            opponent: OpponentConfig::default(),
            objectives: None,
            log_level: "info".to_owned(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SessionError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SessionError::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn max_level(&self) -> Result<Level, SessionError> {
        Level::from_str(&self.log_level).map_err(|_| {
            SessionError::InvalidConfig(format!("unknown log level `{}`", self.log_level))
        })
    }
}

/// Runs one session over a line-oriented transport until the player quits or
/// the input ends.
pub fn serve<R, W>(
    config: SessionConfig,
    input: R,
    mut output: W,
) -> Result<SessionSummary, SessionError>
where
    R: BufRead,
    W: Write,
{
    let dealer = Dealer::from_config(&config)?;
    let mut session = GameSession::new(config.mode, dealer);
    let span = info_span!("session", id = %session.id());
    let _guard = span.enter();

    write_responses(&mut output, session.open())?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let responses = match parse_request(line) {
            Ok(request) => session.handle(request),
            Err(reason) => {
                warn!("Rejected request {:?}: {}", line, reason);
                vec![SessionResponse::InvalidRequest { reason }]
            }
        };
        write_responses(&mut output, responses)?;
        if session.is_done() {
            break;
        }
    }
    if !session.is_done() {
        info!("Input closed, ending session");
        write_responses(&mut output, session.handle(PlayerRequest::Quit))?;
    }
    output.flush()?;
    Ok(session.summary())
}

/// Accepts either a JSON request or a bare move name such as `rock`.
fn parse_request(line: &str) -> Result<PlayerRequest, String> {
    if line.starts_with('{') {
        return serde_json::from_str(line).map_err(|e| format!("malformed request: {}", e));
    }
    line.parse::<Move>()
        .map(|value| PlayerRequest::Move { value })
        .map_err(|e| format!("{}, expected one of {}", e, Move::ALL.iter().join(", ")))
}

fn write_responses<W: Write>(
    output: &mut W,
    responses: Vec<SessionResponse>,
) -> Result<(), SessionError> {
    for response in responses {
        serde_json::to_writer(&mut *output, &response)?;
        output.write_all(b"\n")?;
    }
    Ok(())
}
