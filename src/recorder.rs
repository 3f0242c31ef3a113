// src/recorder.rs
//! Fire-and-forget recording of match decisions
//!
//! A record is built once, submitted to the match service, and forgotten.
//! Failures surface as a destructive toast and the record is dropped; there
//! is no retry and no outbox, and nothing here blocks or reverses queue
//! state. Successful submissions are mirrored to local storage per initiator
//! as an audit trail.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::persistence::StorageAdapter;
use crate::service_client::InteractionSink;
use crate::toast::{Toast, ToastSink};
use crate::types::{InteractionKind, InteractionRecord};

fn mirror_key(initiator_id: &str) -> String {
    format!("interactions:{initiator_id}")
}

pub struct InteractionRecorder {
    sink: Arc<dyn InteractionSink>,
    storage: Arc<dyn StorageAdapter>,
    toasts: Arc<dyn ToastSink>,
}

impl InteractionRecorder {
    pub fn new(
        sink: Arc<dyn InteractionSink>,
        storage: Arc<dyn StorageAdapter>,
        toasts: Arc<dyn ToastSink>,
    ) -> Self {
        Self {
            sink,
            storage,
            toasts,
        }
    }

    /// Build and submit one interaction record. Returns whether submission
    /// succeeded; failure never propagates as an error.
    ///
    /// No de-duplication happens here: two calls for the same target produce
    /// two records. The session's transition guard is what keeps decisions
    /// to one per candidate per pass.
    pub async fn record(
        &self,
        initiator_id: &str,
        target_id: &str,
        kind: InteractionKind,
    ) -> bool {
        let record = InteractionRecord::new(initiator_id, target_id, kind);

        match self.sink.submit(&record).await {
            Ok(()) => {
                debug!("Recorded {} interaction for {}", kind, target_id);
                self.mirror(&record);
                self.toasts.push(Toast::info(
                    "Decision recorded",
                    &format!("{kind} recorded for candidate {target_id}"),
                ));
                true
            }
            Err(e) => {
                warn!("Failed to record interaction: {}", e);
                self.toasts.push(Toast::destructive(
                    "Recording failed",
                    "Could not record the decision. Please try again later.",
                ));
                false
            }
        }
    }

    /// The local audit mirror for one initiator, oldest first.
    pub fn history(&self, initiator_id: &str) -> Vec<InteractionRecord> {
        match self.storage.get(&mirror_key(initiator_id)) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unparsable interaction mirror: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read interaction mirror: {}", e);
                Vec::new()
            }
        }
    }

    fn mirror(&self, record: &InteractionRecord) {
        // Best-effort append; the service already owns the record.
        let key = mirror_key(&record.initiator_id);
        let mut history = self.history(&record.initiator_id);
        history.push(record.clone());

        match serde_json::to_string(&history) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(&key, &raw) {
                    warn!("Failed to persist interaction mirror: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize interaction mirror: {}", e),
        }
    }
}
