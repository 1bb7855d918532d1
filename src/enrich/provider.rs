//! Summary providers: the MediaWiki extracts API.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use super::types::EnrichError;

pub const DEFAULT_API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "CapitalQuest/0.3 (capital-facts)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A source of introductory plain-text extracts, looked up by exact title.
pub trait SummaryProvider: Send {
    /// `Ok(None)` means the service answered but had no extract for `title`.
    fn fetch_extract(&self, title: &str) -> Result<Option<String>, EnrichError>;
}

// ─── MediaWiki response shape ───────────────────────────────────

#[derive(Deserialize, Debug, Default)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Deserialize, Debug, Default)]
struct QueryBody {
    #[serde(default)]
    pages: BTreeMap<String, PageRecord>,
}

#[derive(Deserialize, Debug, Default)]
struct PageRecord {
    #[serde(default)]
    extract: Option<String>,
}

fn extract_from_response(resp: QueryResponse) -> Option<String> {
    let page = resp.query?.pages.into_values().next()?;
    let extract = page.extract?;
    let trimmed = extract.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ─── Wikipedia provider ─────────────────────────────────────────

/// Fetches extracts from a MediaWiki API endpoint over HTTP.
pub struct WikipediaProvider {
    agent: ureq::Agent,
    endpoint: String,
}

impl WikipediaProvider {
    pub fn new(endpoint: impl Into<String>, user_agent: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_ENDPOINT, DEFAULT_USER_AGENT, DEFAULT_TIMEOUT)
    }
}

impl SummaryProvider for WikipediaProvider {
    fn fetch_extract(&self, title: &str) -> Result<Option<String>, EnrichError> {
        debug!("Fetching extract for '{}' from {}", title, self.endpoint);

        let response = self
            .agent
            .get(&self.endpoint)
            .query("action", "query")
            .query("titles", title)
            .query("prop", "extracts")
            .query("exintro", "true")
            .query("explaintext", "true")
            .query("format", "json")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => EnrichError::Status(code),
                ureq::Error::Transport(t) => EnrichError::Network(t.to_string()),
            })?;

        let body: QueryResponse = response
            .into_json()
            .map_err(|e| EnrichError::InvalidResponse(e.to_string()))?;

        Ok(extract_from_response(body))
    }
}
