//! The load state machine surfaced to the user interface.

use crate::error_handling::{LoadError, LoadErrorKind};

/// Where the dataset load currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight. `attempt` is 1-based and counts retries too,
    /// for the progress indicator.
    Loading {
        /// Current attempt number, starting at 1.
        attempt: u32,
    },
    /// The dataset is loaded and usable.
    Ready {
        /// Retries that preceded success.
        retry_count: u32,
    },
    /// The load failed terminally. A manual retry action is offered.
    Failed {
        /// Coarse error kind, for the error screen's headline.
        kind: LoadErrorKind,
        /// Plain-language description.
        message: String,
    },
}

/// Tracks load state transitions.
///
/// Automatic retries happen inside the fetch layer; this machine records
/// the user-visible journey: loading with attempt counts, terminal
/// failure with a manual retry, success with the observed retry count.
#[derive(Debug)]
pub struct LoadTracker {
    state: LoadState,
}

impl Default for LoadTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadTracker {
    /// Starts in `Idle`.
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Marks the first attempt of a load.
    pub fn begin(&mut self) {
        self.state = LoadState::Loading { attempt: 1 };
    }

    /// Marks an automatic retry attempt.
    pub fn observe_retry(&mut self) {
        let attempt = match self.state {
            LoadState::Loading { attempt } => attempt + 1,
            _ => 1,
        };
        self.state = LoadState::Loading { attempt };
    }

    /// Marks terminal success.
    pub fn succeed(&mut self, retry_count: u32) {
        self.state = LoadState::Ready { retry_count };
    }

    /// Marks terminal failure.
    pub fn fail(&mut self, error: &LoadError) {
        self.state = LoadState::Failed {
            kind: error.kind(),
            message: error.user_message(),
        };
    }

    /// The manual retry action: only valid from `Failed`, returns whether
    /// the transition happened.
    pub fn retry(&mut self) -> bool {
        if matches!(self.state, LoadState::Failed { .. }) {
            self.state = LoadState::Loading { attempt: 1 };
            true
        } else {
            false
        }
    }
}
