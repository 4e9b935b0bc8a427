use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::categories::Category;

/// Database model for thread
#[derive(Debug, Clone, FromRow)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a new thread
#[derive(Debug, Clone)]
pub struct CreateThread {
    pub title: String,
    pub content: String,
    pub category: Category,
}
