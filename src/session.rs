// src/session.rs
//! Decision flow over one candidate batch
//!
//! The session ties the queue to the recorder: a decision fires the
//! submission as a detached task, waits out a fixed transition delay, then
//! advances the cursor. Advancement is never gated on the submission
//! resolving, so a slow or failing collaborator cannot stall the flow.
//!
//! While a transition is in flight the session refuses further decisions;
//! the `transitioning` flag is the only mutual exclusion in the core
//! (cooperative, single logical thread).

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::queue::{Advance, MatchQueue};
use crate::recorder::InteractionRecorder;
use crate::toast::{Toast, ToastSink};
use crate::types::{CandidateProfile, InteractionKind};

pub const ADVANCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Save,
    Reject,
}

impl Decision {
    fn kind(self) -> InteractionKind {
        match self {
            Decision::Save => InteractionKind::Save,
            Decision::Reject => InteractionKind::Reject,
        }
    }
}

/// What a `decide()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Cursor moved to the next candidate.
    Advanced,
    /// Last candidate processed; cursor wrapped back to the start.
    Exhausted,
    /// A transition was already in flight; the decision was dropped.
    Busy,
    /// No candidates in the batch.
    Empty,
}

pub struct MatchSession {
    company_id: String,
    queue: MatchQueue,
    recorder: Arc<InteractionRecorder>,
    toasts: Arc<dyn ToastSink>,
    advance_delay: Duration,
    transitioning: bool,
    saved: Vec<CandidateProfile>,
}

impl MatchSession {
    pub fn new(
        company_id: &str,
        candidates: Vec<CandidateProfile>,
        recorder: Arc<InteractionRecorder>,
        toasts: Arc<dyn ToastSink>,
    ) -> Self {
        Self {
            company_id: company_id.to_string(),
            queue: MatchQueue::new(candidates),
            recorder,
            toasts,
            advance_delay: ADVANCE_DELAY,
            transitioning: false,
            saved: Vec::new(),
        }
    }

    /// Override the transition delay (tests, alternate shells).
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    pub fn current(&self) -> Option<&CandidateProfile> {
        self.queue.current()
    }

    pub fn queue(&self) -> &MatchQueue {
        &self.queue
    }

    pub fn saved(&self) -> &[CandidateProfile] {
        &self.saved
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Apply one decision to the current candidate.
    ///
    /// The submission runs detached; the queue advances after the fixed
    /// delay regardless of how (or whether) the submission resolves.
    pub async fn decide(&mut self, decision: Decision) -> SessionStep {
        if self.transitioning {
            return SessionStep::Busy;
        }
        let candidate = match self.queue.current() {
            Some(c) => c.clone(),
            None => return SessionStep::Empty,
        };

        self.transitioning = true;
        debug!(
            "Decision {:?} for candidate {} (cursor {})",
            decision,
            candidate.id,
            self.queue.cursor()
        );

        if decision == Decision::Save {
            self.saved.push(candidate.clone());
        }

        let recorder = self.recorder.clone();
        let company_id = self.company_id.clone();
        let target_id = candidate.id.clone();
        let kind = decision.kind();
        tokio::spawn(async move {
            // Outcome handled inside the recorder (toast on either path).
            recorder.record(&company_id, &target_id, kind).await;
        });

        tokio::time::sleep(self.advance_delay).await;

        let outcome = self.queue.advance();
        self.transitioning = false;

        match outcome {
            Advance::Wrapped => {
                self.toasts.push(Toast::info(
                    "Batch complete",
                    "All candidates in this batch have been processed.",
                ));
                SessionStep::Exhausted
            }
            Advance::Moved => SessionStep::Advanced,
            Advance::Empty => SessionStep::Empty,
        }
    }
}
