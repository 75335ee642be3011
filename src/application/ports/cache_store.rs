// src/application/ports/cache_store.rs
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub type CacheStoreResult<T> = Result<T, CacheStoreError>;

#[derive(Debug, Error)]
pub enum CacheStoreError {
    #[error("cache store unavailable: {0}")]
    Unavailable(String),
    #[error("cache store operation failed: {0}")]
    Operation(String),
}

/// Key-value store with per-key expiry. Expired keys must read as absent.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> CacheStoreResult<Option<Vec<u8>>>;
    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheStoreResult<()>;
    async fn delete(&self, key: &str) -> CacheStoreResult<()>;
}
