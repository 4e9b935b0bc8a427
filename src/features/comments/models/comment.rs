use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::BTreeMap;

use crate::shared::language::Language;

/// Database model for comment
///
/// The text lives in `comment_translations`, one row per language.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: String,
    pub thread_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CommentTranslation {
    pub id: String,
    pub comment_id: String,
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CommentImage {
    pub id: String,
    pub comment_id: String,
    pub filename: String,
    /// Public web path of the stored file
    pub filepath: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the comment ⟕ translation ⟕ image join
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: String,
    pub thread_id: String,
    pub created_at: DateTime<Utc>,
    pub language: Option<String>,
    pub content: Option<String>,
    pub image_id: Option<String>,
    pub filepath: Option<String>,
}

/// A comment merged with all of its translations and its image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAggregate {
    pub id: String,
    pub thread_id: String,
    pub created_at: DateTime<Utc>,
    pub content: BTreeMap<Language, String>,
    pub image_path: Option<String>,
}
