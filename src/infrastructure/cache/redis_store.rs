// src/infrastructure/cache/redis_store.rs
use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

use crate::application::ports::cache_store::{CacheStore, CacheStoreError, CacheStoreResult};

#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Create a Redis backed store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> CacheStoreResult<Self> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| CacheStoreError::Unavailable(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> CacheStoreResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| CacheStoreError::Unavailable(err.to_string()))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> CacheStoreResult<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        conn.get(key)
            .await
            .map_err(|err| CacheStoreError::Operation(err.to_string()))
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheStoreResult<()> {
        let mut conn = self.connection().await?;
        // SET EX rejects zero
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(|err| CacheStoreError::Operation(err.to_string()))
    }

    async fn delete(&self, key: &str) -> CacheStoreResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|err| CacheStoreError::Operation(err.to_string()))
    }
}
