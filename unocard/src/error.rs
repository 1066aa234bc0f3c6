use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("No card given")]
    Empty,
    #[error("Unknown card color `{0}`")]
    UnknownColor(String),
    #[error("Unknown card value `{0}`")]
    UnknownValue(String),
    #[error("Unexpected input after card value: `{0}`")]
    TrailingInput(String),
}

pub type Result<T, E = CardError> = std::result::Result<T, E>;
