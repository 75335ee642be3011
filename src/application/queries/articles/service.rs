use std::sync::Arc;

use crate::application::{
    cache::{ContentCache, ListCache, SingleFlight},
    ports::ContentProviderPort,
    render::RenderPipeline,
};
use crate::domain::article::{ArticleContent, ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) content_cache: ContentCache,
    pub(super) list_cache: ListCache,
    pub(super) provider: Arc<ContentProviderPort>,
    pub(super) pipeline: RenderPipeline,
    pub(super) flights: SingleFlight<ArticleContent>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        content_cache: ContentCache,
        list_cache: ListCache,
        provider: Arc<ContentProviderPort>,
        pipeline: RenderPipeline,
    ) -> Self {
        Self {
            read_repo,
            content_cache,
            list_cache,
            provider,
            pipeline,
            flights: SingleFlight::new(),
        }
    }
}
