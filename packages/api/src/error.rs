use thiserror::Error;

/// Failure modes of a single backend call.
///
/// There is no retry and no structured error-code parsing: a non-2xx status
/// carries the raw response text and the caller maps it to a user-facing
/// status line.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, malformed JSON, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The call did not complete within the per-request timeout.
    #[error("request timed out")]
    Timeout,
}
