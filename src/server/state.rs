use crate::capitals::CountryKey;
use crate::enrich::Enricher;
use std::sync::{Mutex, MutexGuard};

pub struct AppState {
    pub enricher: Mutex<Enricher>,
    pub default_country: CountryKey,
}

impl AppState {
    pub fn new(enricher: Enricher, default_country: CountryKey) -> Self {
        Self {
            enricher: Mutex::new(enricher),
            default_country,
        }
    }

    /// Lock the enricher, recovering the guard if a previous holder panicked.
    pub fn enricher(&self) -> MutexGuard<'_, Enricher> {
        self.enricher.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
