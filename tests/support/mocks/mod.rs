// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod provider;
pub mod registry;
pub mod store;
pub mod time;

pub use provider::{StubFailure, StubProvider};
pub use registry::InMemoryRegistry;
pub use store::{FailingCacheStore, SlowCacheStore};
pub use time::{TestClock, fixed_now};
