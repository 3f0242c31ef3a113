// src/service_client.rs
//! HTTP client for the match service collaborator
//!
//! Two calls: fetch the candidate batch for a company, and submit one
//! interaction record. Responses beyond success/failure are opaque to the
//! core; the request timeout lives on the client builder.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, error};

use crate::types::{CandidateProfile, InteractionRecord};

const MATCHES_ENDPOINT: &str = "/matches";
const INTERACTIONS_ENDPOINT: &str = "/interactions";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Submission seam for interaction records, so the presentation shell and
/// tests can run without the real collaborator.
#[async_trait]
pub trait InteractionSink: Send + Sync {
    async fn submit(&self, record: &InteractionRecord) -> Result<()>;
}

pub struct MatchServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl MatchServiceClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Fetch the ordered candidate batch for a company. This is the match
    /// queue's initial sequence; the ranking behind it is a black box.
    pub async fn fetch_candidates(&self, company_id: &str) -> Result<Vec<CandidateProfile>> {
        let url = format!("{}{}/{}", self.base_url, MATCHES_ENDPOINT, company_id);

        debug!("Fetching candidate batch: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to call match service")?;

        let status = response.status();
        if status.is_success() {
            let candidates: Vec<CandidateProfile> = response
                .json()
                .await
                .context("Failed to parse candidate batch")?;
            debug!("Received {} candidates for {}", candidates.len(), company_id);
            Ok(candidates)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Match service error response: {}", error_text);
            anyhow::bail!("Candidate fetch failed with status {}: {}", status, error_text)
        }
    }
}

#[async_trait]
impl InteractionSink for MatchServiceClient {
    async fn submit(&self, record: &InteractionRecord) -> Result<()> {
        let url = format!("{}{}", self.base_url, INTERACTIONS_ENDPOINT);

        debug!("Submitting {} interaction for {}", record.kind, record.target_id);

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .context("Failed to call interaction endpoint")?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!(
                "Interaction submission failed with status {}: {}",
                status,
                error_text
            )
        }
    }
}
