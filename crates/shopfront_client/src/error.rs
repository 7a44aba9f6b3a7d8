use thiserror::Error;

/// Errors surfaced by the shop backend client.
///
/// These stay inside the fetch layer: the UI only ever sees the tri-state
/// lookup result, so callers log these and settle the cache slot.
#[derive(Debug, Error)]
pub enum ShopApiError {
    /// The configured base URL cannot be used.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// No base URL was configured at all.
    #[error("API base URL is not configured (set {var})")]
    MissingBaseUrl { var: &'static str },

    /// The transport failed: DNS, connection, timeout, or a malformed body.
    #[error("shop request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// All failure statuses are treated alike; there is no status-specific
    /// recovery.
    #[error("shop endpoint returned HTTP {status}")]
    Status { status: u16 },
}
