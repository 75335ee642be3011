use crate::application::{
    dto::{ArticleListItemDto, ArticlePageDto},
    queries::articles::GetArticlePageQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleListItemDto>>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    Ok(Json(articles))
}

pub async fn get_article_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticlePageDto>> {
    let page = state
        .services
        .article_queries
        .get_article_page(GetArticlePageQuery { slug })
        .await
        .into_http()?;
    Ok(Json(page))
}
