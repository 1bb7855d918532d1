//! Core types for the enrichment subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the summary part of an enriched fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactSource {
    Local,
    Wikipedia,
}

impl fmt::Display for FactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Wikipedia => write!(f, "wikipedia"),
        }
    }
}

/// A capital's fun fact, optionally augmented with a fetched summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedFact {
    pub fact: String,
    #[serde(rename = "wikipedia_summary")]
    pub summary: String,
    pub source: FactSource,
}

impl EnrichedFact {
    /// Build from a fact and a (possibly empty) summary.
    pub fn new(fact: String, summary: String) -> Self {
        let source = if summary.is_empty() {
            FactSource::Local
        } else {
            FactSource::Wikipedia
        };
        Self { fact, summary, source }
    }
}

/// Enrichment failures. None of these escape `Enricher::enrich`.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Summary service returned HTTP {0}")]
    Status(u16),

    #[error("Invalid summary response: {0}")]
    InvalidResponse(String),

    #[error("Summary unavailable (offline mode)")]
    Offline,

    #[error("Cache write failed: {0}")]
    CacheWrite(#[from] std::io::Error),

    #[error("Cache encode failed: {0}")]
    CacheEncode(#[from] serde_json::Error),
}
