use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::core::database;
use crate::features::comments::queries;
use crate::features::translations::clients::Translator;
use crate::features::translations::models::{TranslationJob, TranslationOutcome};
use crate::shared::language::Language;

struct QueuedJob {
    job: TranslationJob,
    done: oneshot::Sender<TranslationOutcome>,
}

/// Submitting side of the translation worker, cheap to clone
#[derive(Clone)]
pub struct TranslationQueue {
    sender: mpsc::UnboundedSender<QueuedJob>,
}

impl TranslationQueue {
    /// Submit a job; never blocks and never fails the caller
    pub fn enqueue(&self, job: TranslationJob) -> TranslationHandle {
        let (done, receiver) = oneshot::channel();
        let comment_id = job.comment_id.clone();

        if self.sender.send(QueuedJob { job, done }).is_err() {
            tracing::warn!(
                "Translation worker is not running, comment {} stays untranslated",
                comment_id
            );
        }

        TranslationHandle { receiver }
    }
}

/// Completion signal of one submitted job
pub struct TranslationHandle {
    receiver: oneshot::Receiver<TranslationOutcome>,
}

impl TranslationHandle {
    pub async fn wait(self) -> TranslationOutcome {
        self.receiver.await.unwrap_or(TranslationOutcome::Dropped)
    }
}

/// Receives translation jobs and runs each one in its own task
pub struct TranslationWorker {
    pool: SqlitePool,
    translator: Arc<dyn Translator>,
    receiver: mpsc::UnboundedReceiver<QueuedJob>,
}

/// Create a connected queue and worker
pub fn channel(
    pool: SqlitePool,
    translator: Arc<dyn Translator>,
) -> (TranslationQueue, TranslationWorker) {
    let (sender, receiver) = mpsc::unbounded_channel();

    (
        TranslationQueue { sender },
        TranslationWorker {
            pool,
            translator,
            receiver,
        },
    )
}

impl TranslationWorker {
    /// Run until every queue handle is dropped
    pub async fn run(mut self) {
        tracing::info!("Starting translation worker");

        while let Some(QueuedJob { job, done }) = self.receiver.recv().await {
            let pool = self.pool.clone();
            let translator = Arc::clone(&self.translator);

            tokio::spawn(async move {
                let outcome = process_job(&pool, translator.as_ref(), &job).await;
                // The submitter may have dropped its handle
                let _ = done.send(outcome);
            });
        }

        tracing::info!("Translation queue closed, worker stopped");
    }
}

async fn process_job(
    pool: &SqlitePool,
    translator: &dyn Translator,
    job: &TranslationJob,
) -> TranslationOutcome {
    let target = job.target();

    let translated = match translator.translate(&job.text, target).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(
                "Failed to translate comment {} to {}: {}",
                job.comment_id,
                target,
                e
            );
            return TranslationOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    match save_translation(pool, &job.comment_id, target, &translated).await {
        Ok(()) => {
            tracing::info!("Saved {} translation for comment {}", target, job.comment_id);
            TranslationOutcome::Saved { language: target }
        }
        Err(e) => {
            tracing::error!(
                "Failed to save {} translation for comment {}: {:?}",
                target,
                job.comment_id,
                e
            );
            TranslationOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn save_translation(
    pool: &SqlitePool,
    comment_id: &str,
    language: Language,
    text: &str,
) -> sqlx::Result<()> {
    let mut tx = database::begin_write(pool).await?;

    if let Err(e) = queries::insert_translation(&mut tx, comment_id, language, text).await {
        tx.rollback().await?;
        return Err(e);
    }

    tx.commit().await
}
