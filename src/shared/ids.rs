use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-based identifier: the current Unix time in nanoseconds as a decimal string.
///
/// Ids are strictly increasing within the process; a request landing in the
/// same nanosecond as the previous one gets the previous value plus one.
pub fn next_id() -> String {
    let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);

    let previous = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);

    now.max(previous + 1).to_string()
}
