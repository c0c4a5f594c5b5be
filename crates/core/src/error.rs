//! Protocol violations.
//!
//! These abort a harness. Graceful endings (timeouts, budget exhaustion, a
//! player resigning) are not errors and never show up here.

use std::io;

use thiserror::Error;

use crate::types::{Move, MoveParseError};

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The game rejected a shift or rotation the player asked for.
    #[error("AutoPlayer provided invalid move: {mv} (decision {decision})")]
    InvalidMove { mv: Move, decision: u64 },

    /// Same violation seen by the timed supervisor.
    #[error("AI attempted invalid move: {mv} (decision {decision})")]
    AttemptedInvalidMove { mv: Move, decision: u64 },

    #[error(transparent)]
    UnknownMoveKind(#[from] MoveParseError),

    #[error("failed to spawn decision worker: {0}")]
    WorkerSpawn(#[source] io::Error),
}

impl ProtocolError {
    pub fn code(&self) -> &'static str {
        match self {
            ProtocolError::InvalidMove { .. } | ProtocolError::AttemptedInvalidMove { .. } => {
                "invalid_move"
            }
            ProtocolError::UnknownMoveKind(_) => "unknown_move_kind",
            ProtocolError::WorkerSpawn(_) => "worker_spawn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_move_kind_converts_from_parse_error() {
        let err: ProtocolError = "sideways".parse::<Move>().unwrap_err().into();
        assert_eq!(err.code(), "unknown_move_kind");
        assert_eq!(err.to_string(), "Unknown move kind: sideways");
    }

    #[test]
    fn invalid_move_names_the_move() {
        let err = ProtocolError::InvalidMove {
            mv: Move::RotateCcw,
            decision: 7,
        };
        assert_eq!(err.code(), "invalid_move");
        assert!(err.to_string().contains("rotateCcw"));
        assert!(err.to_string().contains("decision 7"));
    }

    #[test]
    fn attempted_invalid_move_shares_the_code() {
        let err = ProtocolError::AttemptedInvalidMove {
            mv: Move::Left,
            decision: 2,
        };
        assert_eq!(err.code(), "invalid_move");
        assert_eq!(err.to_string(), "AI attempted invalid move: left (decision 2)");
    }
}
