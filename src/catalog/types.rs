use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Catalog load failures with user-friendly messages.
///
/// A failed load is permanent for the session: the UI converts any variant
/// into a single fixed message in the content region, and the user's only
/// recourse is restarting with a reachable source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog source string is not a usable URL.
    #[error("Invalid catalog source: {0}")]
    Source(#[from] crate::util::UrlValidationError),

    /// Network failure or non-success HTTP status from a remote source.
    #[error("Failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a JSON array of tool records.
    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload exceeds the size cap.
    #[error("Catalog too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },
}

// ============================================================================
// Data Structures
// ============================================================================

/// One catalog entry.
///
/// Created at load time from the external JSON source, immutable thereafter.
/// `category` references a registry identifier, but the relationship is not
/// enforced: an item with an unknown category is simply never matched by a
/// category filter (it stays reachable via search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub category: String,
    pub link: String,
}
