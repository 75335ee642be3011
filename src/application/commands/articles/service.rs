use std::sync::Arc;

use crate::application::{
    cache::{ContentCache, ListCache},
    ports::{ClockPort, ContentProviderPort},
};
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};

/// Registration mutations plus the cache invalidation each one requires.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) content_cache: ContentCache,
    pub(super) list_cache: ListCache,
    pub(super) provider: Arc<ContentProviderPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        content_cache: ContentCache,
        list_cache: ListCache,
        provider: Arc<ContentProviderPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            content_cache,
            list_cache,
            provider,
            clock,
        }
    }
}
