use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::Category;
use crate::features::comments::models::CommentAggregate;
use crate::features::comments::queries;
use crate::features::threads::models::{CreateThread, Thread};
use crate::shared::ids::next_id;

/// Service for creating and reading discussion threads
pub struct ThreadService {
    pool: SqlitePool,
}

impl ThreadService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new thread
    pub async fn create(&self, data: CreateThread) -> Result<Thread> {
        if data.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        if data.content.trim().is_empty() {
            return Err(AppError::Validation("content is required".to_string()));
        }

        let thread = Thread {
            id: next_id(),
            title: data.title,
            content: data.content,
            category: data.category.as_str().to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO threads (id, title, content, category, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&thread.id)
        .bind(&thread.title)
        .bind(&thread.content)
        .bind(&thread.category)
        .bind(thread.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create thread: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created thread {} in '{}'", thread.id, thread.category);

        Ok(thread)
    }

    /// Get a thread by id
    pub async fn get(&self, id: &str) -> Result<Thread> {
        sqlx::query_as::<_, Thread>(
            r#"
            SELECT id, title, content, category, created_at
            FROM threads
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch thread {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Thread '{}' not found", id)))
    }

    /// List threads in insertion order, optionally restricted to one category
    pub async fn list(&self, category: Option<Category>) -> Result<Vec<Thread>> {
        let threads = match category {
            Some(category) => {
                sqlx::query_as::<_, Thread>(
                    r#"
                    SELECT id, title, content, category, created_at
                    FROM threads
                    WHERE category = ?
                    ORDER BY julianday(created_at), rowid
                    "#,
                )
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Thread>(
                    r#"
                    SELECT id, title, content, category, created_at
                    FROM threads
                    ORDER BY julianday(created_at), rowid
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list threads: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(threads)
    }

    /// Get a thread together with its merged comments
    pub async fn get_with_comments(&self, id: &str) -> Result<(Thread, Vec<CommentAggregate>)> {
        let thread = self.get(id).await?;

        let mut conn = self.pool.acquire().await?;
        let rows = queries::fetch_thread_comment_rows(&mut conn, &thread.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch comments for thread {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok((thread, queries::group_comment_rows(rows)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_comment, test_pool};
    use crate::shared::language::Language;

    fn new_thread(title: &str, category: Category) -> CreateThread {
        CreateThread {
            title: title.to_string(),
            content: format!("{} body", title),
            category,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = ThreadService::new(test_pool().await);

        let created = service
            .create(new_thread("Hello", Category::Help))
            .await
            .unwrap();
        let fetched = service.get(&created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.category, "help");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let service = ThreadService::new(test_pool().await);

        let result = service.create(new_thread("   ", Category::General)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut data = new_thread("Title", Category::General);
        data.content = "\n\t".to_string();
        let result = service.create(data).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_thread() {
        let service = ThreadService::new(test_pool().await);
        let result = service.get("404").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_filters_by_category_in_insertion_order() {
        let service = ThreadService::new(test_pool().await);

        for (title, category) in [
            ("first", Category::General),
            ("second", Category::Help),
            ("third", Category::General),
            ("fourth", Category::Announcement),
            ("fifth", Category::General),
        ] {
            service.create(new_thread(title, category)).await.unwrap();
        }

        let all: Vec<_> = service
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(all, ["first", "second", "third", "fourth", "fifth"]);

        let general: Vec<_> = service
            .list(Some(Category::General))
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(general, ["first", "third", "fifth"]);

        assert!(service
            .list(Some(Category::Discussion))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_with_comments() {
        let pool = test_pool().await;
        let service = ThreadService::new(pool.clone());

        let thread = service
            .create(new_thread("With comments", Category::Discussion))
            .await
            .unwrap();
        let first = seed_comment(&pool, &thread.id, &[(Language::En, "one")]).await;
        let second = seed_comment(
            &pool,
            &thread.id,
            &[(Language::Ru, "два"), (Language::En, "two")],
        )
        .await;

        let (fetched, comments) = service.get_with_comments(&thread.id).await.unwrap();

        assert_eq!(fetched.id, thread.id);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, first);
        assert_eq!(comments[1].id, second);
        assert_eq!(comments[1].content.len(), 2);
    }
}
