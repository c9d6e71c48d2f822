//! Error types for the identity layer.

use devterm_storage::StorageError;
use thiserror::Error;

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors that can occur in identity operations.
///
/// All variants are recoverable and local to the identity flow; none of them
/// affect dictionary state.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Login credentials did not match a registered account.
    #[error("email or password is incorrect")]
    InvalidCredentials,

    /// Signup attempted with an already-registered email.
    #[error("this email address is already registered")]
    DuplicateEmail,

    /// Password reset requested for an unregistered email.
    #[error("no account is registered for this email address")]
    UnknownEmail,

    /// Verification code mismatch or no pending verification.
    #[error("invalid verification code")]
    InvalidCode,

    /// Underlying account storage failed.
    #[error("account storage error: {0}")]
    Storage(#[from] StorageError),
}
