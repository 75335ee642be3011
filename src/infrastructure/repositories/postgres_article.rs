// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleId, ArticleReadRepository, ArticleRegistration, ArticleSlug, ArticleWriteRepository,
    ExternalUrl, NewArticleRegistration, RegistrationUpdate,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const RETURNING: &str = " RETURNING id, slug, external_url, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RegistrationRow {
    id: i64,
    slug: String,
    external_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRow> for ArticleRegistration {
    type Error = DomainError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            external_url: ExternalUrl::new(row.external_url)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(
        &self,
        registration: NewArticleRegistration,
    ) -> DomainResult<ArticleRegistration> {
        let NewArticleRegistration {
            slug,
            external_url,
            created_at,
            updated_at,
        } = registration;
        let target = external_url.target();

        let row = sqlx::query_as::<_, RegistrationRow>(
            "INSERT INTO published_articles (slug, external_url, workspace, external_post_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, slug, external_url, created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(external_url.as_str())
        .bind(target.workspace.as_str())
        .bind(i64::from(target.post_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleRegistration::try_from(row)
    }

    async fn update(&self, update: RegistrationUpdate) -> DomainResult<ArticleRegistration> {
        let RegistrationUpdate {
            id,
            slug,
            external_url,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE published_articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(external_url) = external_url {
            let target = external_url.target().clone();
            builder.push(", external_url = ");
            builder.push_bind(String::from(external_url));
            builder.push(", workspace = ");
            builder.push_bind(target.workspace.as_str().to_string());
            builder.push(", external_post_id = ");
            builder.push_bind(i64::from(target.post_id));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(RETURNING);

        let row = builder
            .build_query_as::<RegistrationRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        ArticleRegistration::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM published_articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRegistration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            "SELECT id, slug, external_url, created_at, updated_at
             FROM published_articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleRegistration::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRegistration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            "SELECT id, slug, external_url, created_at, updated_at
             FROM published_articles WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleRegistration::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<ArticleRegistration>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            "SELECT id, slug, external_url, created_at, updated_at
             FROM published_articles
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleRegistration::try_from).collect()
    }
}
