use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::features::comments::models::CommentAggregate;
use crate::shared::language::{localize, Language};

/// Multipart form for posting a comment (documentation only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadCommentDto {
    /// Comment text, English or Russian
    pub content: String,
    /// Optional image attachment
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}

/// Comment with every stored language, keyed by language code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub id: String,
    pub thread_id: String,
    pub created_at: DateTime<Utc>,
    #[schema(example = json!({"en": "Hello"}))]
    pub content: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl From<CommentAggregate> for CommentResponseDto {
    fn from(c: CommentAggregate) -> Self {
        Self {
            id: c.id,
            thread_id: c.thread_id,
            created_at: c.created_at,
            content: c
                .content
                .into_iter()
                .map(|(lang, text)| (lang.code().to_string(), text))
                .collect(),
            image_path: c.image_path,
        }
    }
}

/// Comment as shown to a reader in one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedCommentDto {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Text in the requested language, English when missing, else empty
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl LocalizedCommentDto {
    pub fn localized(comment: &CommentAggregate, lang: Language) -> Self {
        Self {
            id: comment.id.clone(),
            created_at: comment.created_at,
            content: localize(&comment.content, lang),
            image_path: comment.image_path.clone(),
        }
    }
}
