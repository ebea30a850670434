//! Server Lifecycle
//!
//! Holds the `Uninitialized -> Serving -> ShuttingDown` phase. Handlers only
//! read it; startup and shutdown are the only writers.

use tokio::sync::watch;
use vecserve::{DomainError, ServerPhase};

#[derive(Debug)]
pub struct Lifecycle {
    phase: watch::Sender<ServerPhase>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        let (phase, _) = watch::channel(ServerPhase::Uninitialized);
        Self { phase }
    }

    pub fn phase(&self) -> ServerPhase {
        *self.phase.borrow()
    }

    /// Move to `next` if it is a legal successor; returns whether it changed
    pub fn advance(&self, next: ServerPhase) -> bool {
        let changed = self.phase.send_if_modified(|current| {
            if current.can_transition_to(next) {
                *current = next;
                true
            } else {
                false
            }
        });
        if changed {
            tracing::info!("Server phase -> {}", next);
        }
        changed
    }

    pub fn begin_serving(&self) -> bool {
        self.advance(ServerPhase::Serving)
    }

    pub fn begin_shutdown(&self) -> bool {
        self.advance(ServerPhase::ShuttingDown)
    }

    /// Error unless requests may currently be served
    pub fn ensure_serving(&self) -> Result<(), DomainError> {
        let phase = self.phase();
        if phase.accepts_requests() {
            Ok(())
        } else {
            Err(DomainError::NotServing { phase })
        }
    }
}
