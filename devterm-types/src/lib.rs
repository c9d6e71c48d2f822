//! Core type definitions for the DevTerm glossary engine.
//!
//! This crate defines the fundamental types shared by the store, storage,
//! gateway, and engine crates:
//! - [`TermEntry`] — one glossary record (term, optional expansion, category,
//!   definition)
//! - [`Identity`] — an authenticated user key (email + display name)
//!
//! All serialized forms use camelCase field names, matching both the
//! classification service wire format and the persisted dataset format.

mod entry;
mod identity;

pub use entry::{TermEntry, GENERAL_CATEGORY};
pub use identity::Identity;
