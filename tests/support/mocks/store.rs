// tests/support/mocks/store.rs
use async_trait::async_trait;
use scopepress::application::ports::cache_store::{CacheStore, CacheStoreError, CacheStoreResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;


/// 常に失敗するキャッシュストア（フェイルオープンの確認用）
#[derive(Default)]
pub struct FailingCacheStore {
    calls: AtomicUsize,
}

impl FailingCacheStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> CacheStoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheStoreError::Unavailable("connection refused".into()))
    }
}

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, _key: &str) -> CacheStoreResult<Option<Vec<u8>>> {
        self.fail()
    }

    async fn put(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> CacheStoreResult<()> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> CacheStoreResult<()> {
        self.fail()
    }
}

/// 読み取りごとに待機し、同時実行数の最大値を記録するストア（常にミス）
pub struct SlowCacheStore {
    delay: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl SlowCacheStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn peak_concurrent_reads(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for SlowCacheStore {
    async fn get(&self, _key: &str) -> CacheStoreResult<Option<Vec<u8>>> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> CacheStoreResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheStoreResult<()> {
        Ok(())
    }
}
