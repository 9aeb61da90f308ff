//! Small time helpers for batch stamping.

use chrono::{Local, NaiveTime};
use tracing::debug;

/// Format a clock time as the `HH:MM` capture stamp.
///
/// Sub-day precision only: records captured at the same clock time on
/// different days are indistinguishable. That is the stored contract, not
/// an accident.
pub fn format_capture_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// The capture stamp for the current run, from local wall-clock time.
///
/// Computed once per run and shared by every record in the batch.
pub fn capture_time() -> String {
    let stamp = format_capture_time(Local::now().time());
    debug!(%stamp, "Computed capture stamp");
    stamp
}
