pub mod game;
pub mod messages;
pub mod round;
