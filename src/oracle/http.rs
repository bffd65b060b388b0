use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MatchError, Result};
use crate::oracle::SimilarityOracle;

// ============================================================================
// Word-embedding similarity service
// ============================================================================

/// Client for a word-similarity service answering
/// `POST {"s_new": [...], "s_old": [...]}` with `{"sent_sim": number|null}`.
pub struct HttpOracle {
    pub endpoint: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct SimilarityRequest<'a> {
    s_new: &'a [String],
    s_old: &'a [String],
}

#[derive(Deserialize)]
struct SimilarityResponse {
    #[serde(default)]
    sent_sim: Option<f64>,
}

impl HttpOracle {
    pub fn new(endpoint: &str, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| MatchError::Config(format!("building HTTP oracle client: {e}")))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl SimilarityOracle for HttpOracle {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        if new.is_empty() || old.is_empty() {
            return None;
        }

        let request = SimilarityRequest { s_new: new, s_old: old };
        let response = match self.client.post(&self.endpoint).json(&request).send() {
            Ok(r) => r,
            Err(e) => {
                warn!(endpoint = self.endpoint.as_str(), error = %e, "similarity service unreachable");
                return None;
            }
        };

        match response.json::<SimilarityResponse>() {
            Ok(body) => body.sent_sim.map(|s| s.clamp(0.0, 1.0)),
            Err(e) => {
                warn!(endpoint = self.endpoint.as_str(), error = %e, "bad similarity service response");
                None
            }
        }
    }
}
