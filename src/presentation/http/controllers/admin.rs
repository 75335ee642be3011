use crate::application::{
    commands::articles::{
        CreateRegistrationCommand, DeleteRegistrationCommand, RefreshArticleCommand,
        UpdateRegistrationCommand,
    },
    dto::ArticleRegistrationDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    pub external_url: String,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRegistrationRequest {
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

pub async fn list_registrations(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
) -> HttpResult<Json<Vec<ArticleRegistrationDto>>> {
    let registrations = state
        .services
        .article_queries
        .list_registrations()
        .await
        .into_http()?;
    Ok(Json(registrations))
}

pub async fn create_registration(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Json(payload): Json<CreateRegistrationRequest>,
) -> HttpResult<(StatusCode, Json<ArticleRegistrationDto>)> {
    let created = state
        .services
        .article_commands
        .create_registration(CreateRegistrationCommand {
            external_url: payload.external_url,
            slug: payload.slug,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_registration(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRegistrationRequest>,
) -> HttpResult<Json<ArticleRegistrationDto>> {
    let updated = state
        .services
        .article_commands
        .update_registration(UpdateRegistrationCommand {
            id,
            external_url: payload.external_url,
            slug: payload.slug,
        })
        .await
        .into_http()?;
    Ok(Json(updated))
}

pub async fn delete_registration(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_registration(DeleteRegistrationCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn refresh_article(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleRegistrationDto>> {
    let refreshed = state
        .services
        .article_commands
        .refresh_article(RefreshArticleCommand { slug })
        .await
        .into_http()?;
    Ok(Json(refreshed))
}
