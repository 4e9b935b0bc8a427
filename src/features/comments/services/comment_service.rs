use sqlx::{SqliteConnection, SqlitePool};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::database;
use crate::core::error::{AppError, Result};
use crate::features::comments::models::CommentAggregate;
use crate::features::comments::queries;
use crate::features::translations::{TranslationHandle, TranslationJob, TranslationQueue};
use crate::modules::storage::{LocalStorage, StoredFile};
use crate::shared::language::Language;

/// Image part of a new comment
#[derive(Debug, Clone)]
pub struct NewImage {
    pub filename: String,
    pub data: Vec<u8>,
}

/// A committed comment and the completion signal of its background translation
pub struct CreatedComment {
    pub comment: CommentAggregate,
    pub translation: TranslationHandle,
}

/// Service for posting comments
pub struct CommentService {
    pool: SqlitePool,
    storage: Arc<LocalStorage>,
    queue: TranslationQueue,
}

impl CommentService {
    pub fn new(pool: SqlitePool, storage: Arc<LocalStorage>, queue: TranslationQueue) -> Self {
        Self {
            pool,
            storage,
            queue,
        }
    }

    /// Create a comment with its original-language text and optional image.
    ///
    /// Everything is written in one transaction; the missing language is
    /// requested from the translation worker only after commit.
    pub async fn create(
        &self,
        thread_id: &str,
        content: String,
        image: Option<NewImage>,
    ) -> Result<CreatedComment> {
        if content.trim().is_empty() {
            return Err(AppError::Validation("content is required".to_string()));
        }

        let mut tx = database::begin_write(&self.pool).await?;
        let mut stored: Option<StoredFile> = None;

        let persisted = self
            .persist(&mut tx, thread_id, &content, image.as_ref(), &mut stored)
            .await;

        let comment = match persisted {
            Ok(comment) => comment,
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!("Failed to roll back comment transaction: {:?}", rollback_err);
                }
                self.discard(stored).await;
                return Err(e);
            }
        };

        if let Err(e) = tx.commit().await {
            tracing::error!("Failed to commit comment {}: {:?}", comment.id, e);
            self.discard(stored).await;
            return Err(AppError::Database(e));
        }

        let source = comment
            .content
            .keys()
            .next()
            .copied()
            .unwrap_or(Language::DEFAULT);

        tracing::info!(
            "Created comment {} on thread {} ({})",
            comment.id,
            thread_id,
            source
        );

        let translation = self.queue.enqueue(TranslationJob {
            comment_id: comment.id.clone(),
            text: content,
            source,
        });

        Ok(CreatedComment {
            comment,
            translation,
        })
    }

    async fn persist(
        &self,
        conn: &mut SqliteConnection,
        thread_id: &str,
        content: &str,
        image: Option<&NewImage>,
        stored: &mut Option<StoredFile>,
    ) -> Result<CommentAggregate> {
        if !queries::thread_exists(conn, thread_id).await? {
            return Err(AppError::NotFound(format!(
                "Thread '{}' not found",
                thread_id
            )));
        }

        let comment = queries::insert_comment(conn, thread_id).await?;

        let language = Language::detect(content);
        queries::insert_translation(conn, &comment.id, language, content).await?;

        let mut image_path = None;
        if let Some(image) = image {
            let file = self.storage.save(&image.filename, &image.data).await?;
            *stored = Some(file.clone());

            let row = queries::insert_image(conn, &comment.id, &file).await?;
            image_path = Some(row.filepath);
        }

        Ok(CommentAggregate {
            id: comment.id,
            thread_id: comment.thread_id,
            created_at: comment.created_at,
            content: BTreeMap::from([(language, content.to_string())]),
            image_path,
        })
    }

    async fn discard(&self, stored: Option<StoredFile>) {
        if let Some(file) = stored {
            self.storage.discard(&file).await;
        }
    }
}
