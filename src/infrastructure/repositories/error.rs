use crate::domain::errors::DomainError;

const CNT_SLUG: &str = "published_articles_slug_key";
const CNT_SLUG_FORMAT: &str = "published_articles_slug_format_chk";
const CNT_POST_ID_POSITIVE: &str = "published_articles_post_id_positive_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_SLUG_FORMAT => DomainError::Validation(
                        "slug may only contain lowercase letters, digits and '-'".into(),
                    ),
                    CNT_POST_ID_POSITIVE => {
                        DomainError::Validation("external post id must be positive".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
