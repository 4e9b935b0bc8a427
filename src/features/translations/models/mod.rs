mod translation;

pub use translation::{TranslationError, TranslationJob, TranslationOutcome};
