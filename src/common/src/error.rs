use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown move `{0}`")]
    UnknownMove(String),
    #[error("unknown objective `{0}`, expected win or lose")]
    UnknownObjective(String),
}
