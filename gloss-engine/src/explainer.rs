//! Explanation capability abstraction trait.
//!
//! Allows swapping the remote upstream client for a stub in tests
//! without changing the gateway handlers.

use async_trait::async_trait;

use crate::ExplainError;

/// The code-explanation capability.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Cancel Safety
/// `explain` is cancel safe. Dropping the future at any await point
/// abandons the in-flight upstream exchange and nothing else.
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Produce a textual explanation of `code`.
    ///
    /// The input is forwarded unmodified; the returned text is the
    /// capability's reply, also unmodified.
    ///
    /// # Errors
    /// Returns [`ExplainError::Connect`] if the upstream is unreachable,
    /// [`ExplainError::UpstreamStatus`] on a non-success reply, or
    /// [`ExplainError::MalformedReply`] if the reply body cannot be decoded.
    async fn explain(&self, code: &str) -> Result<String, ExplainError>;
}
