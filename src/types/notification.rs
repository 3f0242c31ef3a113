// src/types/notification.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Application,
    Interview,
    System,
}

/// A persisted, user-dismissible record of a workflow event.
///
/// `id` and `created_at` are assigned at creation and `read` starts false;
/// only the notification store mutates `read` afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Workflow event: a candidate submitted an application.
    pub fn application_submitted(job_title: &str, candidate_name: &str) -> Self {
        Self::new(
            NotificationKind::Application,
            "Application received",
            &format!("{candidate_name} applied for {job_title}"),
        )
    }

    /// Workflow event: an interview was scheduled.
    pub fn interview_scheduled(job_title: &str, when: &str) -> Self {
        Self::new(
            NotificationKind::Interview,
            "Interview scheduled",
            &format!("Interview for {job_title} scheduled at {when}"),
        )
    }
}
