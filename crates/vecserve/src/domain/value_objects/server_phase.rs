//! ServerPhase - process lifecycle states

use serde::{Deserialize, Serialize};

/// Lifecycle of the serving process
///
/// `Uninitialized` -> `Serving` -> `ShuttingDown`; transitions only move forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ServerPhase {
    Uninitialized,
    Serving,
    ShuttingDown,
}

impl ServerPhase {
    pub fn accepts_requests(self) -> bool {
        self == ServerPhase::Serving
    }

    /// Whether `next` is a legal successor of this phase
    pub fn can_transition_to(self, next: ServerPhase) -> bool {
        matches!(
            (self, next),
            (ServerPhase::Uninitialized, ServerPhase::Serving)
                | (ServerPhase::Uninitialized, ServerPhase::ShuttingDown)
                | (ServerPhase::Serving, ServerPhase::ShuttingDown)
        )
    }
}

impl std::fmt::Display for ServerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerPhase::Uninitialized => write!(f, "uninitialized"),
            ServerPhase::Serving => write!(f, "serving"),
            ServerPhase::ShuttingDown => write!(f, "shutting_down"),
        }
    }
}
