use std::time::{Duration, Instant};

/// Result of a confirmed deletion, shown for a fixed duration
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Removed,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RemovalPhase {
    #[default]
    Idle,
    /// Modal open, waiting for confirm or cancel
    ConfirmPending { symbol: String },
    /// Deletion request in flight; the modal is locked
    Deleting { symbol: String },
    Notice {
        symbol: String,
        outcome: Outcome,
        until: Instant,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemovalError {
    #[error("a removal is already open for {0}")]
    Busy(String),
}

/// Confirmation-gated deletion of a single entry
///
/// The collection is only mutated by the caller after `resolve` reports a
/// successful deletion, never before.
#[derive(Clone, Debug)]
pub struct RemovalWorkflow {
    phase: RemovalPhase,
    notice_for: Duration,
}

impl RemovalWorkflow {
    pub fn new(notice_for: Duration) -> Self {
        Self {
            phase: RemovalPhase::Idle,
            notice_for,
        }
    }

    pub fn phase(&self) -> &RemovalPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RemovalPhase::Idle
    }

    /// Symbol awaiting confirmation or deletion
    pub fn pending(&self) -> Option<&str> {
        match &self.phase {
            RemovalPhase::ConfirmPending { symbol } | RemovalPhase::Deleting { symbol } => {
                Some(symbol)
            }
            RemovalPhase::Idle | RemovalPhase::Notice { .. } => None,
        }
    }

    /// Open the confirmation modal; only valid from `Idle`
    pub fn request(&mut self, symbol: impl Into<String>) -> Result<(), RemovalError> {
        match &self.phase {
            RemovalPhase::Idle => {
                self.phase = RemovalPhase::ConfirmPending {
                    symbol: symbol.into(),
                };
                Ok(())
            }
            RemovalPhase::ConfirmPending { symbol }
            | RemovalPhase::Deleting { symbol }
            | RemovalPhase::Notice { symbol, .. } => Err(RemovalError::Busy(symbol.clone())),
        }
    }

    /// Close the modal without touching the collection
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            RemovalPhase::ConfirmPending { .. } | RemovalPhase::Notice { .. } => {
                self.phase = RemovalPhase::Idle;
                true
            }
            RemovalPhase::Idle | RemovalPhase::Deleting { .. } => false,
        }
    }

    /// Lock the modal and hand back the symbol to delete
    pub fn confirm(&mut self) -> Option<String> {
        let RemovalPhase::ConfirmPending { symbol } = &self.phase else {
            return None;
        };
        let symbol = symbol.clone();
        self.phase = RemovalPhase::Deleting {
            symbol: symbol.clone(),
        };
        Some(symbol)
    }

    /// Record the backend's answer for `symbol`
    ///
    /// Returns `false` when no deletion of `symbol` is in flight, in which
    /// case the caller must not mutate anything.
    pub fn resolve(&mut self, symbol: &str, result: Result<(), String>, now: Instant) -> bool {
        if !matches!(&self.phase, RemovalPhase::Deleting { symbol: s } if s == symbol) {
            return false;
        }
        let outcome = match result {
            Ok(()) => Outcome::Removed,
            Err(message) => Outcome::Failed(message),
        };
        self.phase = RemovalPhase::Notice {
            symbol: symbol.to_string(),
            outcome,
            until: now + self.notice_for,
        };
        true
    }

    /// Expire the notice; returns whether the phase changed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            RemovalPhase::Notice { until, .. } if now >= until => {
                self.phase = RemovalPhase::Idle;
                true
            }
            _ => false,
        }
    }
}
