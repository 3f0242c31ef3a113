// src/types/mod.rs
//! Data model shared by the matching queue, recorder, and notification store

pub mod candidate;
pub mod interaction;
pub mod notification;

pub use candidate::{CandidateProfile, Project};
pub use interaction::{InteractionKind, InteractionRecord};
pub use notification::{Notification, NotificationKind};
