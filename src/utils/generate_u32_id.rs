use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter backing call correlation ids.
static CALL_ID_COUNTER: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(0));

/// Returns the next correlation id. Ids are unique within a process until
/// the counter wraps at `u32::MAX`, far beyond the number of calls any
/// client keeps in flight.
#[inline]
pub fn generate_u32_id() -> u32 {
    CALL_ID_COUNTER.fetch_add(1, Ordering::Relaxed) as u32
}
