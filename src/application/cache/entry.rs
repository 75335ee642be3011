use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ports::{CacheStorePort, ClockPort};

/// Envelope written to the store. Carrying the deadline next to the value
/// lets stores without native expiry honour the TTL as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { value, expires_at }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Typed, fail-open access to the raw byte store.
#[derive(Clone)]
pub(super) struct EntryStore {
    store: Arc<CacheStorePort>,
    clock: Arc<ClockPort>,
}

impl EntryStore {
    pub(super) fn new(store: Arc<CacheStorePort>, clock: Arc<ClockPort>) -> Self {
        Self { store, clock }
    }

    pub(super) async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(key, "cache miss");
                return None;
            }
            Err(err) => {
                warn!(key, error = %err, "cache read failed; treating as miss");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(key, error = %err, "discarding undecodable cache entry");
                return None;
            }
        };

        if entry.is_expired(self.clock.now()) {
            debug!(key, expires_at = %entry.expires_at, "cache entry expired");
            return None;
        }
        debug!(key, "cache hit");
        Some(entry.value)
    }

    pub(super) async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) {
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        let bytes = match serde_json::to_vec(&entry) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key, error = %err, "failed to encode cache entry");
                return;
            }
        };
        if let Err(err) = self.store.put(key, bytes, ttl).await {
            warn!(key, error = %err, "cache write failed");
        }
    }

    pub(super) async fn remove(&self, key: &str) {
        match self.store.delete(key).await {
            Ok(()) => debug!(key, "cache entry removed"),
            // the entry stays until its ttl runs out
            Err(err) => warn!(key, error = %err, "cache delete failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_expires_at_deadline() {
        let now = Utc::now();
        let entry = CacheEntry::new("v", now, Duration::from_secs(60));
        assert!(!entry.is_expired(now));
        assert!(!entry.is_expired(now + TimeDelta::seconds(59)));
        assert!(entry.is_expired(now + TimeDelta::seconds(60)));
    }

    #[test]
    fn oversized_ttl_saturates() {
        let entry = CacheEntry::new((), Utc::now(), Duration::MAX);
        assert_eq!(entry.expires_at, DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn envelope_is_json() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = CacheEntry::new(vec![1, 2], now, Duration::from_secs(3600));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["value"], serde_json::json!([1, 2]));
        assert_eq!(json["expires_at"], "2024-05-01T01:00:00Z");
    }
}
