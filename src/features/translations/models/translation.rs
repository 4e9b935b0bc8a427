use thiserror::Error;

use crate::shared::language::Language;
use crate::shared::prompts::TemplateError;

/// Background request to add the missing language to a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    pub comment_id: String,
    /// Original text as submitted
    pub text: String,
    /// Detected language of `text`
    pub source: Language,
}

impl TranslationJob {
    pub fn target(&self) -> Language {
        self.source.counterpart()
    }
}

/// How a background translation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The translation row for `language` was committed
    Saved { language: Language },
    /// Upstream or storage failure; the comment keeps only its original text
    Failed { reason: String },
    /// The worker went away before reporting
    Dropped,
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Translation response contained no choices")]
    EmptyResponse,

    #[error("Failed to render translation prompt: {0}")]
    Template(#[from] TemplateError),
}

impl From<reqwest::Error> for TranslationError {
    fn from(e: reqwest::Error) -> Self {
        TranslationError::Request(e.to_string())
    }
}
