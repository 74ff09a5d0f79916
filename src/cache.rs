use serde_json::Value;
use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

/// Revalidation-window cache for response bodies, keyed by full request URL.
///
/// This mirrors the time-based revalidation the original deployment
/// delegated to its rendering framework: a pure TTL bound per resource with
/// no size limit and no eviction beyond overwrite-on-refetch. Entries store
/// the raw JSON body; the fetch layer re-decodes on every hit.
#[derive(Debug, Default)]
pub(crate) struct RevalidationCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    body: Value,
}

impl RevalidationCache {
    /// Returns the cached body for `url` if it is younger than `window`.
    pub(crate) fn get(&self, url: &str, window: Duration) -> Option<Value> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(url)?;
        if entry.fetched_at.elapsed() < window {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    pub(crate) fn insert(&self, url: &str, body: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                url.to_string(),
                CacheEntry {
                    fetched_at: Instant::now(),
                    body,
                },
            );
        }
    }
}
