// src/application/ports/mod.rs
pub mod cache_store;
pub mod content_provider;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type CacheStorePort = dyn cache_store::CacheStore;
pub type ContentProviderPort = dyn content_provider::ContentProvider;
pub type ClockPort = dyn time::Clock;
