// tests/support/mocks/provider.rs
use async_trait::async_trait;
use scopepress::application::ports::content_provider::{ContentProvider, ProviderError};
use scopepress::domain::article::{ArticleContent, ExternalPostRef};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum StubFailure {
    Unauthorized,
    Transport,
}

/// 記事本文を返すスタブプロバイダ。呼び出し回数を記録する
#[derive(Default)]
pub struct StubProvider {
    posts: Mutex<HashMap<ExternalPostRef, ArticleContent>>,
    failures: Mutex<HashMap<ExternalPostRef, StubFailure>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 各呼び出しの前に `delay` だけ待つ
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn insert(&self, target: ExternalPostRef, content: ArticleContent) {
        self.posts.lock().unwrap().insert(target, content);
    }

    pub fn remove(&self, target: &ExternalPostRef) {
        self.posts.lock().unwrap().remove(target);
    }

    pub fn fail(&self, target: ExternalPostRef, failure: StubFailure) {
        self.failures.lock().unwrap().insert(target, failure);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProvider for StubProvider {
    async fn fetch_post(&self, target: &ExternalPostRef) -> Result<ArticleContent, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().unwrap().get(target).copied();
        match failure {
            Some(StubFailure::Unauthorized) => {
                return Err(ProviderError::Unauthorized("401 Unauthorized".into()));
            }
            Some(StubFailure::Transport) => {
                return Err(ProviderError::Transport("connection reset".into()));
            }
            None => {}
        }

        self.posts
            .lock()
            .unwrap()
            .get(target)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }
}
