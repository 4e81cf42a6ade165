//! Record identifier generation

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, TryRngCore};
use tracing::warn;

static FALLBACK_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a new record id
///
/// 128 bits from the OS random source, laid out as a v4 UUID. When the OS
/// source is unavailable the id is derived from the clock instead.
pub fn new_id() -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(err) => {
            warn!(error = %err, "OS random source unavailable, using timestamp id");
            fallback_id(Utc::now())
        },
    }
}

/// Clock-derived id: `<epoch-millis>-<subsec-nanos>-<seq>`
pub(crate) fn fallback_id(now: DateTime<Utc>) -> String {
    let seq = FALLBACK_SEQ.fetch_add(1, Ordering::Relaxed);
    format!(
        "{}-{}-{}",
        now.timestamp_millis(),
        now.timestamp_subsec_nanos(),
        seq
    )
}
