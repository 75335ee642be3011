mod list;
mod page;
mod registrations;
mod service;

pub use page::GetArticlePageQuery;
pub use service::ArticleQueryService;
