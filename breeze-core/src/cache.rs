//! The single-slot weather cache and its freshness rule.

use crate::{model::WeatherSnapshot, store::KeyValueStore};
use serde::{Deserialize, Serialize};

/// Name of the one slot the widget uses.
pub const CACHE_KEY: &str = "weatherData";

/// Default time-to-live: one hour, in milliseconds.
pub const DEFAULT_TTL_MS: i64 = 60 * 60 * 1000;

/// The cached record: a snapshot plus the moment it was written.
///
/// Its age, not its content, determines validity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry {
    pub data: WeatherSnapshot,
    /// Write time, epoch milliseconds.
    pub timestamp: i64,
}

/// Freshness-aware wrapper over the store slot.
pub struct WeatherCache {
    store: Box<dyn KeyValueStore>,
    ttl_ms: i64,
}

impl WeatherCache {
    pub fn new(store: Box<dyn KeyValueStore>, ttl_ms: i64) -> Self {
        Self { store, ttl_ms }
    }

    /// Read the slot. A missing or malformed slot is absent, never an error.
    pub fn read(&self) -> Option<CacheEntry> {
        let raw = self.store.get(CACHE_KEY)?;

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!("discarding malformed cache slot: {err}");
                None
            }
        }
    }

    /// Strictly-younger-than-TTL check.
    pub fn is_fresh(&self, entry: &CacheEntry, now_ms: i64) -> bool {
        now_ms - entry.timestamp < self.ttl_ms
    }

    /// Replace the slot with `{data, timestamp}`.
    ///
    /// A store failure does not abort the display cycle; the fetched data is
    /// still shown, it just will not be cached.
    pub fn write(&self, snapshot: &WeatherSnapshot, now_ms: i64) {
        let entry = CacheEntry { data: snapshot.clone(), timestamp: now_ms };

        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("failed to serialize cache entry: {err}");
                return;
            }
        };

        if let Err(err) = self.store.put(CACHE_KEY, &raw) {
            tracing::warn!("failed to write cache slot: {err:#}");
        }
    }

    /// Remove the slot entirely.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(CACHE_KEY) {
            tracing::warn!("failed to clear cache slot: {err:#}");
        }
    }
}
