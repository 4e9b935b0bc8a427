//! Background EN↔RU translation of comments.
//!
//! Comment creation submits a [`TranslationJob`](models::TranslationJob) to the
//! [`TranslationQueue`]; the [`TranslationWorker`] calls the chat-completion API
//! and stores the result in its own transaction.

pub mod clients;
pub mod models;
pub mod workers;

pub use clients::{ChatCompletionClient, Translator};
pub use models::{TranslationError, TranslationJob, TranslationOutcome};
pub use workers::{channel, TranslationHandle, TranslationQueue, TranslationWorker};
