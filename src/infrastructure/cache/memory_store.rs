use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

use crate::application::ports::ClockPort;
use crate::application::ports::cache_store::{CacheStore, CacheStoreResult};

struct StoredValue {
    bytes: Vec<u8>,
    expires_at: DateTime<Utc>,
}

/// Process-local store used when no Redis URL is configured and in tests.
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, StoredValue>>,
    clock: Arc<ClockPort>,
}

impl InMemoryCacheStore {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    pub async fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .read()
            .await
            .values()
            .filter(|value| value.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> CacheStoreResult<Option<Vec<u8>>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|value| value.expires_at > now)
            .map(|value| value.bytes.clone()))
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheStoreResult<()> {
        let now = self.clock.now();
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.write().await;
        entries.retain(|_, stored| stored.expires_at > now);
        entries.insert(
            key.to_string(),
            StoredValue {
                bytes: value,
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheStoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::time::Clock;
    use std::sync::Mutex;

    struct ManualClock(Mutex<DateTime<Utc>>);

    impl ManualClock {
        fn advance(&self, by: TimeDelta) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    #[tokio::test]
    async fn values_expire_after_ttl() {
        let clock = Arc::new(ManualClock(Mutex::new(Utc::now())));
        let store = InMemoryCacheStore::new(clock.clone());

        store
            .put("content:docs:1", b"body".to_vec(), Duration::from_secs(30))
            .await
            .unwrap();
        assert_eq!(
            store.get("content:docs:1").await.unwrap().as_deref(),
            Some(&b"body"[..])
        );

        clock.advance(TimeDelta::seconds(30));
        assert_eq!(store.get("content:docs:1").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_value() {
        let clock = Arc::new(ManualClock(Mutex::new(Utc::now())));
        let store = InMemoryCacheStore::new(clock);
        store
            .put("list:all", b"[]".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        store.delete("list:all").await.unwrap();
        store.delete("list:all").await.unwrap();
        assert_eq!(store.get("list:all").await.unwrap(), None);
    }
}
