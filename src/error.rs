//! Error types for SDK operations
//!
//! The library performs no recovery of its own: every failure propagates
//! to the immediate caller of the operation that triggered it. Retry,
//! backoff, and token refresh policy belong to the embedding application.

use thiserror::Error;

/// Errors from authentication and API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// `authenticate` was called with arguments matching none of the
    /// three grant shapes. Raised before any network call is made.
    #[error("authentication method could not be detected")]
    UnclassifiableGrant,

    /// The API returned a non-2xx status. `body` carries the parsed JSON
    /// error payload from upstream, unmodified.
    #[error("api returned {status}: {body}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    /// Network-level failure (DNS, connection refused, TLS, transport
    /// timeout). Surfaced as-is, never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON, or was JSON of an
    /// unexpected shape.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A request-side payload could not be serialized.
    #[error("could not encode request parameters: {0}")]
    Encode(String),
}

/// Result alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
