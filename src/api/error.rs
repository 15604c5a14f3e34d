use thiserror::Error;

/// Failure talking to a dashboard endpoint. Non-2xx statuses, transport
/// errors, and malformed JSON are the whole taxonomy; a missing optional
/// field in a 2xx body is handled by serde defaults, not here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx HTTP status
    #[error("HTTP {0}")]
    Http(u16),
    /// Network/request error
    #[error("request failed: {0}")]
    Request(String),
    /// Malformed response body
    #[error("failed to parse response: {0}")]
    Decode(String),
}
