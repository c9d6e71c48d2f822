//! Error types for the engine layer.

use devterm_gateway::ClassificationError;
use devterm_storage::StorageError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in engine operations.
///
/// None of these are fatal: a classification failure leaves store and
/// persisted state untouched, and a storage failure after a mutation leaves
/// the in-memory change standing so the user can retry or export.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A store mutation was attempted without a signed-in identity.
    #[error("sign in to use the dictionary")]
    NotSignedIn,

    /// The classification gateway failed.
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    /// Persisting the dataset failed. Recoverable warning — the in-memory
    /// state is unaffected.
    #[error("could not save the dictionary: {0}")]
    Storage(#[from] StorageError),

    /// Export requested with nothing to export.
    #[error("the dictionary is empty, nothing to export")]
    EmptyDictionary,
}
