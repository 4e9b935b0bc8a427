use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::Category;
use crate::features::comments::dtos::{CommentResponseDto, LocalizedCommentDto};
use crate::features::threads::models::Thread;
use crate::shared::constants::MAX_TITLE_LENGTH;
use crate::shared::language::Language;

/// Request DTO for creating a thread
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateThreadDto {
    #[validate(length(
        min = 1,
        max = MAX_TITLE_LENGTH,
        message = "title must be between 1 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    /// One of general, help, discussion, announcement (default: general)
    #[schema(example = "general")]
    pub category: Option<String>,
}

/// Query params for listing threads
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListThreadsQuery {
    /// Only threads in this category
    pub category: Option<String>,
    /// Response language: en or ru
    pub lang: Option<String>,
}

impl ListThreadsQuery {
    /// Parsed category filter; an empty value means no filter
    pub fn category_filter(&self) -> Result<Option<Category>, String> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

/// Response DTO for a freshly created thread
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThreadResponseDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentResponseDto>,
}

impl From<Thread> for ThreadResponseDto {
    fn from(t: Thread) -> Self {
        Self {
            category: t.category.parse().unwrap_or_default(),
            id: t.id,
            title: t.title,
            content: t.content,
            created_at: t.created_at,
            comments: Vec::new(),
        }
    }
}

/// Thread as shown to a reader in one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedThreadDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<LocalizedCommentDto>,
    pub language: Language,
}

impl LocalizedThreadDto {
    pub fn new(thread: Thread, comments: Vec<LocalizedCommentDto>, lang: Language) -> Self {
        Self {
            category: thread.category.parse().unwrap_or_default(),
            id: thread.id,
            title: thread.title,
            content: thread.content,
            created_at: thread.created_at,
            comments,
            language: lang,
        }
    }
}
