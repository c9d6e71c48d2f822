//! Classification gateway for DevTerm.
//!
//! Wraps the external generative-language service behind the [`Classify`]
//! trait: one request per user-submitted raw text blob, normalized into an
//! accepted/rejected batch ([`ClassificationOutcome`]). The gateway isolates
//! transport and service failure from the dictionary store — any failure
//! collapses into a [`ClassificationError`] with a user-facing message, and
//! the store is left untouched by the caller.
//!
//! Requests carry an explicit timeout so a hung service call cannot leave
//! the caller waiting forever.

mod classifier;
mod error;

pub use classifier::{ClassificationOutcome, Classify, ClassifierConfig, TermClassifier};
pub use error::{ClassificationError, ClassificationResult};
