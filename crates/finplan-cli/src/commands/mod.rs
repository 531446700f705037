pub mod insurance;
pub mod investments;
pub mod loans;

use std::time::Instant;

/// Microseconds since `start`, saturating.
pub(crate) fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
