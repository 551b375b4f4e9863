//! Error types for fuel-digest.
//!
//! Extraction and translation never fail on content; only the upstream
//! source (fetch, decoding) and configuration-time checks produce errors.

/// Error type for digest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream page could not be retrieved (network error or non-success status).
    #[error("content unavailable from {url}: {reason}")]
    FetchUnavailable {
        /// Requested URL.
        url: String,
        /// Transport-level cause.
        reason: String,
    },

    /// The fetched payload could not be turned into a usable document.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Two source phrases invert to the same target phrase.
    ///
    /// Only raised by strict dictionary construction; the lenient constructor
    /// records the collision and lets the later pair win.
    #[error("dictionary collision on {target:?}: {first:?} and {second:?}")]
    DictionaryCollision {
        /// Shared target phrase.
        target: String,
        /// Earlier source phrase (overwritten in the inverse table).
        first: String,
        /// Later source phrase (kept in the inverse table).
        second: String,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Status store failure.
    #[error("status store error: {0}")]
    Status(String),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error should be shown to the user as "failed to load content".
    ///
    /// Fetch and document failures render identically; logs keep them apart.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::FetchUnavailable { .. } | Self::MalformedDocument(_))
    }
}

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, Error>;
