//! O*NET Web Services adapter — authenticated keyword search for candidate
//! SOC classifications.
//!
//! One outbound GET per `search` call; no retries and no timeout override
//! beyond the transport default. Callers needing resilience wrap it
//! themselves.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{CandidateEntry, CandidateSet};

const URL_ROOT: &str = "https://services.onetcenter.org/ws/";
const SEARCH_PATH: &str = "online/search";
const USER_AGENT: &str = concat!("soc-autocoder/", env!("CARGO_PKG_VERSION"), " (bot)");

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("taxonomy service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed taxonomy response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Taxonomy keyword-search capability. The resolver depends on this trait
/// rather than on the concrete client, so tests substitute deterministic
/// stubs.
#[async_trait]
pub trait TaxonomySearch: Send + Sync {
    async fn search(&self, keyword: &str, limit: u32) -> Result<CandidateSet, ServiceError>;
}

/// O*NET credentials, supplied at construction and held only long enough to
/// derive the Basic auth header. Never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(user:pass)>` per RFC 7617.
    fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    occupation: Vec<OccupationRow>,
}

#[derive(Debug, Deserialize)]
struct OccupationRow {
    relevance_score: f64,
    code: String,
    title: String,
}

/// Normalizes a 200-response body into a `CandidateSet`, preserving service
/// order. A missing or empty `occupation` array yields an empty set; whether
/// empty is an error is the caller's decision.
fn parse_search_body(body: &str) -> Result<CandidateSet, serde_json::Error> {
    let parsed: SearchResponse = serde_json::from_str(body)?;
    let entries = parsed
        .occupation
        .into_iter()
        .map(|row| CandidateEntry::new(row.relevance_score, row.code, row.title))
        .collect();
    Ok(CandidateSet::new(entries))
}

/// Authenticated O*NET client. The auth header is built once at
/// construction; no network traffic happens until `search` is called.
#[derive(Clone)]
pub struct OnetClient {
    client: Client,
    authorization: String,
}

impl OnetClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            authorization: credentials.authorization_header(),
        }
    }
}

#[async_trait]
impl TaxonomySearch for OnetClient {
    async fn search(&self, keyword: &str, limit: u32) -> Result<CandidateSet, ServiceError> {
        let url = format!("{URL_ROOT}{SEARCH_PATH}");
        let end = limit.to_string();

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .query(&[("keyword", keyword), ("end", end.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let set = parse_search_body(&body)?;
        debug!("taxonomy search for {keyword:?} returned {} candidates", set.len());
        Ok(set)
    }
}
