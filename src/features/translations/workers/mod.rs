mod translation_worker;

pub use translation_worker::{channel, TranslationHandle, TranslationQueue, TranslationWorker};
