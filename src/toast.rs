// src/toast.rs
//! Ephemeral user feedback contract
//!
//! Toasts are fire-and-forget: no acknowledgment, no delivery guarantee. The
//! production sink routes them through tracing; tests use a recording sink.

use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Default,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: ToastSeverity,
}

impl Toast {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity: ToastSeverity::Default,
        }
    }

    pub fn destructive(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity: ToastSeverity::Destructive,
        }
    }
}

pub trait ToastSink: Send + Sync {
    fn push(&self, toast: Toast);
}

/// Default sink: surfaces toasts as log lines.
pub struct LogToasts;

impl ToastSink for LogToasts {
    fn push(&self, toast: Toast) {
        match toast.severity {
            ToastSeverity::Default => info!(title = %toast.title, "{}", toast.message),
            ToastSeverity::Destructive => warn!(title = %toast.title, "{}", toast.message),
        }
    }
}

/// Collects toasts for assertions in tests.
#[derive(Default)]
pub struct RecordingToasts {
    pub toasts: Mutex<Vec<Toast>>,
}

impl RecordingToasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }
}

impl ToastSink for RecordingToasts {
    fn push(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
