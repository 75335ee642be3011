mod memory_store;
mod redis_store;

pub use memory_store::InMemoryCacheStore;
pub use redis_store::RedisCacheStore;
