//! Shared result types returned to callers and serialized at the boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata record for one captioned image.
///
/// Created once per overlay invocation and returned to the caller;
/// the PNG it points to lives on disk with its own lifetime. The optional
/// fields are omitted from serialized output when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResult {
    /// Full path of the written PNG.
    pub path: String,
    /// Basename of the written PNG.
    pub filename: String,
    /// Wall-clock timestamp embedded in the filename (`YYYYMMDD_HHMMSS`).
    pub timestamp: String,
    /// The original caption, unwrapped.
    pub caption: String,
    /// Caller-supplied metadata, echoed back verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<BTreeMap<String, String>>,
    /// Inline `data:image/png;base64,...` payload. Attached by the caller
    /// layer on request, never populated by the overlay itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}
