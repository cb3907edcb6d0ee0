use std::io;

use game::{
    entrypoint::{serve, SessionConfig},
    error::SessionError,
};
use tracing::info;

fn main() -> Result<(), SessionError> {
    // Config
    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(config.max_level()?)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let summary = serve(config, stdin.lock(), io::stdout().lock())?;
    info!(
        "Final score {} over {} rounds",
        summary.score, summary.rounds_played
    );
    Ok(())
}
