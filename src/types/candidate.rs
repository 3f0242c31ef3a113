// src/types/candidate.rs
use serde::{Deserialize, Serialize};

/// A job-seeker profile presented for a save/reject decision.
///
/// Immutable for the lifetime of one matching session; fetched once from the
/// match service when the session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}
