use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration")]
    InvalidConfig,
    #[error("Coordinates out of range")]
    OutOfRange,
}

pub type Result<T> = core::result::Result<T, GameError>;
