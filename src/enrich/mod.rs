//! Fact enrichment: fun facts augmented with cached Wikipedia summaries.

pub mod cache;
pub mod enricher;
pub mod provider;
pub mod summary;
pub mod types;

pub use cache::SummaryCache;
pub use enricher::Enricher;
pub use provider::{SummaryProvider, WikipediaProvider};
pub use summary::truncate_summary;
pub use types::{EnrichError, EnrichedFact, FactSource};
