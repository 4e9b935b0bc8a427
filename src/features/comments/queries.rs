//! Comment storage operations.
//!
//! Every function runs on a caller-supplied connection so the same query can
//! take part in a request transaction or a worker transaction.

use chrono::Utc;
use sqlx::SqliteConnection;

use crate::features::comments::models::{
    Comment, CommentAggregate, CommentImage, CommentRow, CommentTranslation,
};
use crate::modules::storage::StoredFile;
use crate::shared::ids::next_id;
use crate::shared::language::Language;

pub async fn thread_exists(conn: &mut SqliteConnection, thread_id: &str) -> sqlx::Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM threads WHERE id = ?")
        .bind(thread_id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(found.is_some())
}

pub async fn insert_comment(conn: &mut SqliteConnection, thread_id: &str) -> sqlx::Result<Comment> {
    let comment = Comment {
        id: next_id(),
        thread_id: thread_id.to_string(),
        created_at: Utc::now(),
    };

    sqlx::query("INSERT INTO comments (id, thread_id, created_at) VALUES (?, ?, ?)")
        .bind(&comment.id)
        .bind(&comment.thread_id)
        .bind(comment.created_at)
        .execute(&mut *conn)
        .await?;

    Ok(comment)
}

pub async fn insert_translation(
    conn: &mut SqliteConnection,
    comment_id: &str,
    language: Language,
    content: &str,
) -> sqlx::Result<CommentTranslation> {
    let translation = CommentTranslation {
        id: next_id(),
        comment_id: comment_id.to_string(),
        language: language.code().to_string(),
        content: content.to_string(),
    };

    sqlx::query(
        "INSERT INTO comment_translations (id, comment_id, language, content) VALUES (?, ?, ?, ?)",
    )
    .bind(&translation.id)
    .bind(&translation.comment_id)
    .bind(&translation.language)
    .bind(&translation.content)
    .execute(&mut *conn)
    .await?;

    Ok(translation)
}

pub async fn insert_image(
    conn: &mut SqliteConnection,
    comment_id: &str,
    file: &StoredFile,
) -> sqlx::Result<CommentImage> {
    let image = CommentImage {
        id: next_id(),
        comment_id: comment_id.to_string(),
        filename: file.filename.clone(),
        filepath: file.web_path.clone(),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO comment_images (id, comment_id, filename, filepath, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&image.id)
    .bind(&image.comment_id)
    .bind(&image.filename)
    .bind(&image.filepath)
    .bind(image.created_at)
    .execute(&mut *conn)
    .await?;

    Ok(image)
}

/// All comments of a thread joined with their translations and images,
/// ordered by comment creation, then by row insertion
pub async fn fetch_thread_comment_rows(
    conn: &mut SqliteConnection,
    thread_id: &str,
) -> sqlx::Result<Vec<CommentRow>> {
    sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT
            c.id,
            c.thread_id,
            c.created_at,
            t.language,
            t.content,
            i.id AS image_id,
            i.filepath
        FROM comments c
        LEFT JOIN comment_translations t ON t.comment_id = c.id
        LEFT JOIN comment_images i ON i.comment_id = c.id
        WHERE c.thread_id = ?
        ORDER BY julianday(c.created_at), c.rowid, t.rowid, i.rowid
        "#,
    )
    .bind(thread_id)
    .fetch_all(&mut *conn)
    .await
}

/// Merge joined rows into one aggregate per comment, keeping row order.
///
/// The first translation seen for a language and the first image seen win.
/// Rows with an unknown language code contribute nothing but the comment
/// itself.
pub fn group_comment_rows(rows: Vec<CommentRow>) -> Vec<CommentAggregate> {
    let mut comments: Vec<CommentAggregate> = Vec::new();

    for row in rows {
        let is_new = comments.last().map_or(true, |last| last.id != row.id);
        if is_new {
            comments.push(CommentAggregate {
                id: row.id,
                thread_id: row.thread_id,
                created_at: row.created_at,
                content: Default::default(),
                image_path: None,
            });
        }

        let Some(current) = comments.last_mut() else {
            continue;
        };

        if let (Some(code), Some(text)) = (row.language, row.content) {
            if let Ok(language) = code.parse::<Language>() {
                current.content.entry(language).or_insert(text);
            }
        }

        if current.image_path.is_none() {
            current.image_path = row.filepath;
        }
    }

    comments
}
