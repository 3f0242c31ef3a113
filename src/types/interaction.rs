// src/types/interaction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decision kinds accepted by the match service.
///
/// The company-facing flow only produces `Save` and `Reject`; `Like` and
/// `Dislike` exist for the candidate-facing flow on the same endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Save,
    Reject,
    Like,
    Dislike,
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionKind::Save => write!(f, "save"),
            InteractionKind::Reject => write!(f, "reject"),
            InteractionKind::Like => write!(f, "like"),
            InteractionKind::Dislike => write!(f, "dislike"),
        }
    }
}

/// One recorded decision. Created exactly once per decision and never
/// mutated; ownership transfers to the match service on submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub initiator_id: String,
    pub target_id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub timestamp: DateTime<Utc>,
}

impl InteractionRecord {
    /// Build a record with the submission timestamp taken now.
    pub fn new(initiator_id: &str, target_id: &str, kind: InteractionKind) -> Self {
        Self {
            initiator_id: initiator_id.to_string(),
            target_id: target_id.to_string(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case_and_type_tag() {
        let record = InteractionRecord::new("company-1", "student-7", InteractionKind::Save);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["initiatorId"], "company-1");
        assert_eq!(value["targetId"], "student-7");
        assert_eq!(value["type"], "save");
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_kind_round_trips_lowercase() {
        for (kind, tag) in [
            (InteractionKind::Save, "\"save\""),
            (InteractionKind::Reject, "\"reject\""),
            (InteractionKind::Like, "\"like\""),
            (InteractionKind::Dislike, "\"dislike\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), tag);
        }
    }
}
