//! Dictionary engine for DevTerm.
//!
//! Ties the core together: the [`Session`] context gates every store
//! mutation and selects which persisted dataset is active; the
//! [`DictionaryEngine`] drives the control flow — establish identity, load
//! the dataset, classify submitted text, merge, re-save, project the grouped
//! view.
//!
//! Execution is event-driven with a single suspension point (the
//! classification call). A generation counter fences that point so a stale
//! completion can never clobber state belonging to a newer request or
//! session.

mod engine;
mod error;
mod session;

pub use engine::{DictionaryEngine, GenerateOutcome};
pub use error::{EngineError, EngineResult};
pub use session::Session;
