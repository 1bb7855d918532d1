//! File-based summary cache, by default at ~/.capital-quest/capital_facts_cache.json.
//!
//! One JSON object mapping name → summary. Keys are exact names. Entries
//! never expire. Every insert rewrites the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::types::EnrichError;

/// The summary cache.
pub struct SummaryCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SummaryCache {
    /// Load the cache from a file. A missing file is an empty cache; an
    /// unreadable or corrupt one degrades to empty with a warning.
    pub fn load_from(path: PathBuf) -> Self {
        let entries = Self::read_file(&path);
        debug!("Loaded {} cached summaries from {}", entries.len(), path.display());
        Self { path, entries }
    }

    fn read_file(path: &Path) -> BTreeMap<String, String> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("Could not read summary cache {}: {}", path.display(), e);
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("Could not parse summary cache {}: {}", path.display(), e);
            BTreeMap::new()
        })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Store a summary in memory and persist the whole cache.
    /// The in-memory entry is kept even if the write fails.
    pub fn put(&mut self, name: &str, summary: &str) -> Result<(), EnrichError> {
        self.entries.insert(name.to_string(), summary.to_string());
        self.persist()
    }

    fn persist(&self) -> Result<(), EnrichError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
