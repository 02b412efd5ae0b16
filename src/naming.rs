//! Output filename generation for captioned images.
//!
//! Filenames embed a wall-clock timestamp at second resolution plus a
//! process-wide sequence number:
//!
//! ```text
//! captioned_20260807_153000_0003.png
//! ```
//!
//! The timestamp alone is not unique — two overlays finishing within the
//! same second would collide and one would silently overwrite the other —
//! so the sequence number disambiguates back-to-back and concurrent
//! invocations within one process. Separate processes writing to the same
//! directory in the same second can still collide when their counters line
//! up; callers needing cross-process uniqueness should use per-process
//! output directories.

use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};

/// Timestamp layout embedded in generated filenames (`20260807_153000`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A generated output filename and the timestamp embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName {
    /// Basename, e.g. `captioned_20260807_153000_0003.png`.
    pub filename: String,
    /// The `YYYYMMDD_HHMMSS` portion, also returned to callers in results.
    pub timestamp: String,
}

/// Generate the next output filename from the current wall-clock time.
pub fn next_output_name() -> OutputName {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    OutputName {
        filename: format!("captioned_{timestamp}_{seq:04}.png"),
        timestamp,
    }
}
