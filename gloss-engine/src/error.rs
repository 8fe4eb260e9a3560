//! Error types for the engine crate.

/// Errors that can occur while consulting the explanation capability.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExplainError {
    /// The configured upstream endpoint is not a usable HTTP URL.
    #[error("invalid upstream endpoint {endpoint}: {reason}")]
    BadEndpoint { endpoint: String, reason: String },

    /// TCP connection to the upstream service failed.
    #[error("upstream connect failed: {0}")]
    Connect(String),

    /// The HTTP exchange itself failed (handshake, send, or body read).
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream service answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream reply body is not the expected `{"result": ...}` shape.
    #[error("malformed upstream reply: {0}")]
    MalformedReply(String),
}
