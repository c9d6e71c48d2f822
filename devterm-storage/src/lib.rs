//! Durable per-identity storage for DevTerm.
//!
//! Models the browser-profile-scoped key/value storage of the original app
//! as a small SQLite slot table. Each slot holds one JSON document:
//! - `devterm_data_<email>` — that identity's entry list, exact store order
//! - `devterm_current_user` — the active identity, if any
//! - `devterm_users_db` — registered accounts (owned by the identity crate
//!   through the generic slot API)
//!
//! Saves are total overwrites. Loads degrade gracefully: an absent slot is
//! an empty dataset, and a malformed slot resets that identity's view to
//! empty with a logged warning — corruption must never crash the caller.
//! This storage is scoped to the local profile; it is not a sync mechanism.

mod error;
mod profile_store;

pub use error::{StorageError, StorageResult};
pub use profile_store::ProfileStore;
