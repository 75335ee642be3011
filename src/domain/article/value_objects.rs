use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EXTERNAL_POST_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://([^./]+)\.esa\.io/posts/(\d+)").expect("external post url pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// URL path segment under which a registration is published.
///
/// Only lowercase ASCII letters, digits and hyphens are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let valid = value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if !valid {
            return Err(DomainError::Validation(
                "slug must contain only lowercase letters, numbers, and hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable title derived from the slug: `hello-world` → `Hello World`.
    pub fn display_title(&self) -> String {
        self.0
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

impl TryFrom<String> for ArticleSlug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Workspace (team) name on the external knowledge-base service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Workspace(String);

impl Workspace {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("workspace cannot be empty".into()));
        }
        if value.contains(['.', '/', ':']) || value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "invalid workspace name: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Workspace> for String {
    fn from(value: Workspace) -> Self {
        value.0
    }
}

impl TryFrom<String> for Workspace {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ExternalPostId(i64);

impl ExternalPostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "external post id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl fmt::Display for ExternalPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ExternalPostId> for i64 {
    fn from(value: ExternalPostId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for ExternalPostId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Identity of a post on the external service. Content and metadata cache
/// entries are keyed by this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalPostRef {
    pub workspace: Workspace,
    pub post_id: ExternalPostId,
}

impl ExternalPostRef {
    pub const fn new(workspace: Workspace, post_id: ExternalPostId) -> Self {
        Self { workspace, post_id }
    }
}

impl fmt::Display for ExternalPostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workspace, self.post_id)
    }
}

/// Public URL of the external post, e.g. `https://docs.esa.io/posts/42`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExternalUrl {
    raw: String,
    target: ExternalPostRef,
}

impl ExternalUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let raw = value.into();
        let captures = EXTERNAL_POST_URL
            .captures(raw.trim())
            .ok_or_else(|| DomainError::validation("invalid external post url format"))?;

        let workspace = Workspace::new(&captures[1])?;
        let post_id = captures[2]
            .parse::<i64>()
            .map_err(|_| DomainError::validation("external post id is out of range"))
            .and_then(ExternalPostId::new)?;

        Ok(Self {
            raw: raw.trim().to_string(),
            target: ExternalPostRef::new(workspace, post_id),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn target(&self) -> &ExternalPostRef {
        &self.target
    }
}

impl fmt::Display for ExternalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<ExternalUrl> for String {
    fn from(value: ExternalUrl) -> Self {
        value.raw
    }
}

impl TryFrom<String> for ExternalUrl {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
