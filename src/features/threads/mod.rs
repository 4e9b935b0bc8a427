//! Discussion threads.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/threads` | List threads, optionally by `category` |
//! | POST | `/api/threads` | Create a thread |
//! | GET | `/api/threads/{id}` | Thread with its localized comments |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ThreadService;
