pub mod articles;

pub use articles::{
    ArticleHeaderDto, ArticleListItemDto, ArticlePageDto, ArticleRegistrationDto, PageHeadDto,
};
