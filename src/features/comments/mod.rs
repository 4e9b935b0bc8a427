//! Comments and their per-language text.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/threads/{id}/comments` | Post a comment (multipart `content`, optional `image`) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;

pub use services::CommentService;
