//! Database utility functions.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a 24-character hex ID for database entities.
///
/// Layout: 8 hex digits of unix seconds, 10 of per-process entropy, 6 of a
/// wrapping counter.
pub fn generate_entity_id() -> String {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let seconds = duration.as_secs() as u32;
    let entropy = ((u64::from(duration.subsec_nanos()) << 8) ^ u64::from(std::process::id()))
        & 0xff_ffff_ffff;
    let count = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;
    format!("{:08x}{:010x}{:06x}", seconds, entropy, count)
}

/// Whether `id` has the shape of a generated entity id.
pub fn is_valid_entity_id(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Get current datetime as string in SQLite format
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
