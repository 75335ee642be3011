// tests/support/mocks/registry.rs
use async_trait::async_trait;
use scopepress::domain::article::{
    ArticleId, ArticleReadRepository, ArticleRegistration, ArticleSlug, ArticleWriteRepository,
    NewArticleRegistration, RegistrationUpdate,
};
use scopepress::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/// インメモリの記事登録リポジトリ（slug の一意制約つき）
#[derive(Default)]
pub struct InMemoryRegistry {
    rows: Mutex<Vec<ArticleRegistration>>,
    next_id: Mutex<i64>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

fn slug_taken(rows: &[ArticleRegistration], slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
    rows.iter()
        .any(|row| &row.slug == slug && Some(row.id) != except)
}

#[async_trait]
impl ArticleWriteRepository for InMemoryRegistry {
    async fn insert(&self, new: NewArticleRegistration) -> DomainResult<ArticleRegistration> {
        let mut rows = self.rows.lock().unwrap();
        if slug_taken(&rows, &new.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let registration = ArticleRegistration {
            id: ArticleId::new(*next_id)?,
            slug: new.slug,
            external_url: new.external_url,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        rows.push(registration.clone());
        Ok(registration)
    }

    async fn update(&self, update: RegistrationUpdate) -> DomainResult<ArticleRegistration> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if slug_taken(&rows, slug, Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(external_url) = update.external_url {
            row.external_url = external_url;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryRegistry {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRegistration>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRegistration>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| &row.slug == slug)
            .cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<ArticleRegistration>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(rows)
    }
}
