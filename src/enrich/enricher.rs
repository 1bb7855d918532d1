//! Enricher: fun fact plus a cached, best-effort summary.
//!
//! Summary flow:  Cache → provider (unless offline) → truncate → cache + persist
//! Any provider failure yields an empty summary and leaves the cache untouched.

use tracing::{debug, warn};

use super::cache::SummaryCache;
use super::provider::{SummaryProvider, WikipediaProvider};
use super::summary::{truncate_summary, DEFAULT_MAX_LENGTH};
use super::types::{EnrichError, EnrichedFact};
use crate::capitals;

/// Owns the summary cache and the provider used to fill it.
pub struct Enricher {
    cache: SummaryCache,
    provider: Box<dyn SummaryProvider>,
    max_length: usize,
    offline: bool,
}

impl Enricher {
    pub fn new(cache: SummaryCache, provider: Box<dyn SummaryProvider>) -> Self {
        Self {
            cache,
            provider,
            max_length: DEFAULT_MAX_LENGTH,
            offline: false,
        }
    }

    /// An enricher backed by the public Wikipedia API.
    pub fn wikipedia(cache: SummaryCache) -> Self {
        Self::new(cache, Box::new(WikipediaProvider::default()))
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set offline mode. Only cached summaries are returned.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }

    /// The fun fact for a capital plus a summary when one can be had.
    pub fn enrich(&mut self, capital: &str) -> EnrichedFact {
        let fact = capitals::fun_fact(capital);
        let summary = self.fetch_summary(capital);
        EnrichedFact::new(fact, summary)
    }

    /// Summary for `name` at the configured length. Never fails; an
    /// unavailable summary is the empty string.
    pub fn fetch_summary(&mut self, name: &str) -> String {
        self.fetch_summary_with_max(name, self.max_length)
    }

    pub fn fetch_summary_with_max(&mut self, name: &str, max_length: usize) -> String {
        match self.try_fetch_summary(name, max_length) {
            Ok(summary) => summary,
            Err(e) => {
                debug!("No summary for '{}': {}", name, e);
                String::new()
            }
        }
    }

    /// The fallible core of `fetch_summary`.
    ///
    /// A missing extract is `Ok("")` and is not cached. A successful fetch is
    /// cached even when truncation leaves nothing. Cache write failures are
    /// logged and do not fail the fetch.
    pub fn try_fetch_summary(&mut self, name: &str, max_length: usize) -> Result<String, EnrichError> {
        // 1. Cache
        if let Some(cached) = self.cache.get(name) {
            debug!("Summary cache hit for '{}'", name);
            return Ok(cached.to_string());
        }

        // 2. Provider
        if self.offline {
            return Err(EnrichError::Offline);
        }
        let extract = match self.provider.fetch_extract(name)? {
            Some(extract) => extract,
            None => return Ok(String::new()),
        };

        // 3. Truncate and store
        let summary = truncate_summary(&extract, max_length);
        if let Err(e) = self.cache.put(name, &summary) {
            warn!("Could not save summary cache {}: {}", self.cache.path().display(), e);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::types::FactSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    enum Canned {
        Extract(&'static str),
        Missing,
        Fail,
    }

    struct FakeProvider {
        calls: Arc<AtomicUsize>,
        response: Canned,
    }

    impl SummaryProvider for FakeProvider {
        fn fetch_extract(&self, _title: &str) -> Result<Option<String>, EnrichError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.response {
                Canned::Extract(s) => Ok(Some(s.to_string())),
                Canned::Missing => Ok(None),
                Canned::Fail => Err(EnrichError::Network("connection refused".into())),
            }
        }
    }

    fn enricher_with(response: Canned) -> (Enricher, Arc<AtomicUsize>, TempDir) {
        let dir = TempDir::new().unwrap();
        let cache = SummaryCache::load_from(dir.path().join("cache.json"));
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider {
            calls: calls.clone(),
            response,
        };
        (Enricher::new(cache, Box::new(provider)), calls, dir)
    }

    #[test]
    fn test_enrich_offline_sacramento() {
        let (mut enricher, calls, _dir) = enricher_with(Canned::Fail);
        enricher.set_offline(true);
        let e = enricher.enrich("Sacramento");
        assert_eq!(e.fact, "Sacramento started as a Gold Rush town and has a historic riverfront.");
        assert_eq!(e.summary, "");
        assert_eq!(e.source, FactSource::Local);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_enrich_with_summary() {
        let (mut enricher, _calls, _dir) =
            enricher_with(Canned::Extract("Jaipur is the capital of Rajasthan. It is called the Pink City."));
        let e = enricher.enrich("Jaipur");
        assert_eq!(e.source, FactSource::Wikipedia);
        assert_eq!(e.summary, "Jaipur is the capital of Rajasthan. It is called the Pink City.");
        assert!(e.fact.contains("Pink City"));
    }

    #[test]
    fn test_enrich_unknown_capital_fallback_fact() {
        let (mut enricher, _calls, _dir) = enricher_with(Canned::Missing);
        let e = enricher.enrich("Atlantis");
        assert_eq!(e.fact, "Atlantis is an interesting place to visit!");
        assert_eq!(e.source, FactSource::Local);
    }

    #[test]
    fn test_network_failure_is_absorbed_and_not_cached() {
        let (mut enricher, calls, _dir) = enricher_with(Canned::Fail);
        assert_eq!(enricher.fetch_summary("London"), "");
        assert!(!enricher.cache().contains("London"));
        assert!(matches!(
            enricher.try_fetch_summary("London", 200),
            Err(EnrichError::Network(_))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_extract_not_cached() {
        let (mut enricher, calls, _dir) = enricher_with(Canned::Missing);
        assert_eq!(enricher.fetch_summary("Nowhere"), "");
        assert!(!enricher.cache().contains("Nowhere"));
        // A later call retries the provider.
        enricher.fetch_summary("Nowhere");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_second_fetch_served_from_cache() {
        let (mut enricher, calls, _dir) = enricher_with(Canned::Extract("Austin is the capital of Texas."));
        let first = enricher.fetch_summary("Austin");
        let second = enricher.fetch_summary("Austin");
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_prepopulated_cache_skips_network() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        let mut cache = SummaryCache::load_from(path);
        cache.put("Edinburgh", "Edinburgh is the capital of Scotland.").unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider {
            calls: calls.clone(),
            response: Canned::Fail,
        };
        let mut enricher = Enricher::new(cache, Box::new(provider));

        assert_eq!(enricher.fetch_summary("Edinburgh"), "Edinburgh is the capital of Scotland.");
        assert_eq!(enricher.fetch_summary("Edinburgh"), "Edinburgh is the capital of Scotland.");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_offline_still_uses_cache() {
        let (mut enricher, calls, _dir) = enricher_with(Canned::Extract("Cardiff is the capital of Wales."));
        enricher.fetch_summary("Cardiff");
        enricher.set_offline(true);
        assert_eq!(enricher.fetch_summary("Cardiff"), "Cardiff is the capital of Wales.");
        assert_eq!(enricher.fetch_summary("Belfast"), "");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_successful_fetch_is_persisted() {
        let (mut enricher, _calls, dir) = enricher_with(Canned::Extract("Shimla is a hill station."));
        enricher.fetch_summary("Shimla");
        let reloaded = SummaryCache::load_from(dir.path().join("cache.json"));
        assert_eq!(reloaded.get("Shimla"), Some("Shimla is a hill station."));
    }

    #[test]
    fn test_summary_respects_max_length() {
        let (enricher, _calls, _dir) = enricher_with(Canned::Extract(
            "Kolkata is the capital of West Bengal. It is known as the City of Joy. It was the capital of British India until 1911.",
        ));
        let mut enricher = enricher.with_max_length(40);
        let s = enricher.fetch_summary("Kolkata");
        assert_eq!(s, "Kolkata is the capital of West Bengal.");
    }

    #[test]
    fn test_persist_failure_still_returns_summary() {
        let dir = TempDir::new().unwrap();
        // Cache path is a directory, so every write fails.
        let cache = SummaryCache::load_from(dir.path().to_path_buf());
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider {
            calls: calls.clone(),
            response: Canned::Extract("Gangtok has monasteries."),
        };
        let mut enricher = Enricher::new(cache, Box::new(provider));
        assert_eq!(enricher.fetch_summary("Gangtok"), "Gangtok has monasteries.");
        // Held in memory for the rest of the process.
        assert_eq!(enricher.fetch_summary("Gangtok"), "Gangtok has monasteries.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
