// tests/support/helpers.rs
use axum::body;
use axum::http::StatusCode;
use scopepress::application::cache::{ContentCache, ListCache};
use scopepress::application::ports::{CacheStorePort, ClockPort, ContentProviderPort};
use scopepress::application::services::{ApplicationServices, ServiceSettings};
use scopepress::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use scopepress::infrastructure::cache::InMemoryCacheStore;
use scopepress::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use super::mocks::{InMemoryRegistry, StubProvider, TestClock};

pub const ADMIN_TOKEN: &str = "admin-secret";
pub const SCOPE: &str = ".article-content";
pub const CONTENT_TTL: Duration = Duration::from_secs(60 * 60 * 24);
pub const LIST_TTL: Duration = Duration::from_secs(60 * 60);

pub fn settings() -> ServiceSettings {
    ServiceSettings {
        content_ttl: CONTENT_TTL,
        list_ttl: LIST_TTL,
        scope_selector: SCOPE.into(),
        admin_token: ADMIN_TOKEN.into(),
    }
}

/// モックで組み立てたアプリケーション一式
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub registry: Arc<InMemoryRegistry>,
    pub provider: Arc<StubProvider>,
    pub store: Arc<CacheStorePort>,
    pub clock: Arc<TestClock>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_provider(StubProvider::new())
    }

    pub fn with_provider(provider: StubProvider) -> Self {
        let clock = Arc::new(TestClock::new());
        let clock_port: Arc<ClockPort> = clock.clone();
        let store: Arc<CacheStorePort> = Arc::new(InMemoryCacheStore::new(clock_port));
        Self::assemble(Arc::new(provider), store, clock)
    }

    pub fn with_store(store: Arc<CacheStorePort>) -> Self {
        Self::with_provider_and_store(StubProvider::new(), store)
    }

    pub fn with_provider_and_store(provider: StubProvider, store: Arc<CacheStorePort>) -> Self {
        Self::assemble(Arc::new(provider), store, Arc::new(TestClock::new()))
    }

    fn assemble(
        provider: Arc<StubProvider>,
        store: Arc<CacheStorePort>,
        clock: Arc<TestClock>,
    ) -> Self {
        let registry = Arc::new(InMemoryRegistry::new());
        let write_repo: Arc<dyn ArticleWriteRepository> = registry.clone();
        let read_repo: Arc<dyn ArticleReadRepository> = registry.clone();
        let provider_port: Arc<ContentProviderPort> = provider.clone();
        let clock_port: Arc<ClockPort> = clock.clone();

        let services = Arc::new(ApplicationServices::new(
            write_repo,
            read_repo,
            Arc::clone(&store),
            provider_port,
            clock_port,
            settings(),
        ));

        Self {
            services,
            registry,
            provider,
            store,
            clock,
        }
    }

    /// 同じストアを共有するコンテンツキャッシュ
    pub fn content_cache(&self) -> ContentCache {
        let clock: Arc<ClockPort> = self.clock.clone();
        ContentCache::new(Arc::clone(&self.store), clock, CONTENT_TTL)
    }

    pub fn list_cache(&self) -> ListCache {
        let clock: Arc<ClockPort> = self.clock.clone();
        ListCache::new(Arc::clone(&self.store), clock, LIST_TTL)
    }

    pub fn router(&self) -> axum::Router {
        self.router_with_origins(&[])
    }

    pub fn router_with_origins(&self, allowed_origins: &[String]) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, allowed_origins)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// エラーレスポンスの JSON 形式とステータスを検証する
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
