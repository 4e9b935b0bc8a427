use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;

use crate::core::config::{
    AppConfig, Config, DatabaseConfig, SwaggerConfig, TranslationConfig, UploadConfig,
};
use crate::core::database;
use crate::features::comments::queries;
use crate::features::translations::{TranslationError, Translator};
use crate::shared::ids::next_id;
use crate::shared::language::Language;

/// Fresh in-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed database with several connections and migrations applied.
///
/// The returned directory owns the database file.
pub async fn file_pool(max_connections: u32) -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create database directory");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("forum.db").display()),
        max_connections,
        min_connections: 1,
        acquire_timeout_secs: 30,
        idle_timeout_secs: 600,
        max_lifetime_secs: 1800,
        busy_timeout_secs: 30,
    };

    let pool = database::create_pool(&config)
        .await
        .expect("Failed to open file database");
    database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}

pub fn test_config(uploads_dir: &Path) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024 * 1024,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            busy_timeout_secs: 5,
        },
        translation: TranslationConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "deepseek-chat".to_string(),
            request_timeout: Duration::from_secs(1),
        },
        uploads: UploadConfig {
            dir: uploads_dir.to_path_buf(),
            url_prefix: "/static/uploads".to_string(),
        },
        swagger: SwaggerConfig {
            title: "PKO Forum API".to_string(),
            version: "0.1.0".to_string(),
            description: "test".to_string(),
        },
    }
}

/// Insert a thread directly and return its id
pub async fn seed_thread(pool: &SqlitePool, category: &str) -> String {
    let id = next_id();
    sqlx::query(
        "INSERT INTO threads (id, title, content, category, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind("Seeded thread")
    .bind("Seeded body")
    .bind(category)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .expect("Failed to seed thread");
    id
}

/// Insert a comment with the given translations, in order, and return its id
pub async fn seed_comment(
    pool: &SqlitePool,
    thread_id: &str,
    translations: &[(Language, &str)],
) -> String {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let comment = queries::insert_comment(&mut conn, thread_id)
        .await
        .expect("Failed to seed comment");
    for (language, text) in translations {
        queries::insert_translation(&mut conn, &comment.id, *language, text)
            .await
            .expect("Failed to seed translation");
    }
    comment.id
}

/// `(language, content)` rows of a comment in insertion order
pub async fn translation_rows(pool: &SqlitePool, comment_id: &str) -> Vec<(String, String)> {
    sqlx::query_as(
        "SELECT language, content FROM comment_translations WHERE comment_id = ? ORDER BY rowid",
    )
    .bind(comment_id)
    .fetch_all(pool)
    .await
    .expect("Failed to read translations")
}

pub async fn comment_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
        .expect("Failed to count comments")
}

pub async fn image_count(pool: &SqlitePool, comment_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comment_images WHERE comment_id = ?")
        .bind(comment_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count images")
}

/// Answers with `[<target>] <text>`
pub struct PrefixTranslator;

#[async_trait]
impl Translator for PrefixTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        Ok(format!("[{}] {}", target, text))
    }
}

/// Fails like an unreachable upstream
pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _target: Language) -> Result<String, TranslationError> {
        Err(TranslationError::Request("connection refused".to_string()))
    }
}

/// Fails like an upstream answering with zero choices
pub struct EmptyTranslator;

#[async_trait]
impl Translator for EmptyTranslator {
    async fn translate(&self, _text: &str, _target: Language) -> Result<String, TranslationError> {
        Err(TranslationError::EmptyResponse)
    }
}

pub const MULTIPART_BOUNDARY: &str = "pkoforum-test-boundary";

pub enum MultipartPart<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

/// Encode parts as a `multipart/form-data` body using [`MULTIPART_BOUNDARY`]
pub fn multipart_body(parts: &[MultipartPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        match part {
            MultipartPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            MultipartPart::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: {}\r\n\r\n",
                        name, filename, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}
