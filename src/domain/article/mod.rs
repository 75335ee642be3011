pub mod content;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use content::{ArticleAuthor, ArticleContent, ArticleListEntry, ArticleMetadata};
pub use entity::{ArticleRegistration, NewArticleRegistration, RegistrationUpdate};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleId, ArticleSlug, ExternalPostId, ExternalPostRef, ExternalUrl, Workspace,
};
