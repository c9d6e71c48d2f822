//! Error types for the classification gateway.

use thiserror::Error;

/// Result type for classification operations.
pub type ClassificationResult<T> = Result<T, ClassificationError>;

/// Errors that can occur when classifying terms.
///
/// Every variant carries a user-facing message; transport-level detail stays
/// inside the message string and never leaks as structured data. The gateway
/// performs no retries — a failed attempt is reported immediately and the
/// user resubmits.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// Network-level failure reaching the service.
    #[error("could not reach the classification service: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("classification request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("classification service returned status {0}")]
    Service(u16),

    /// The service answered without any usable content.
    #[error("classification service returned an empty response")]
    EmptyResponse,

    /// The response could not be parsed into a term batch.
    #[error("could not parse the classification response: {0}")]
    MalformedResponse(String),
}
