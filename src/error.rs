// Error types for the configuration, replay and parsing layers.
// The decision core itself never fails; see policy.rs.

use thiserror::Error;

use crate::types::Direction;

#[derive(Debug, Error)]
#[error("invalid direction: {0}")]
pub struct ParseDirectionError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to open log file: {0}")]
    Open(#[source] std::io::Error),
    #[error("failed to read line {line}: {source}")]
    ReadLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON on line {line}: {source}")]
    ParseLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("turn {0} not found in log file")]
    TurnNotFound(i32),
    #[error(transparent)]
    InvalidDirection(#[from] ParseDirectionError),
    #[error("turn {turn}: expected one of {expected:?}, but got {actual}")]
    UnexpectedMove {
        turn: i32,
        expected: Vec<Direction>,
        actual: Direction,
    },
}
