//! Identity layer for DevTerm.
//!
//! The dictionary engine only ever sees an authenticated [`Identity`] (or
//! none); how that identity is produced is hidden behind the
//! [`IdentityProvider`] trait so a real authentication backend can be
//! substituted without touching the store.
//!
//! The bundled [`MockIdentityProvider`] simulates the whole flow locally:
//! signup with email-code verification, login, and password reset, with
//! accounts kept as plaintext records in a profile-store slot.
//!
//! # Non-goal
//!
//! The mock provider is demo-only and **not security-bearing**: credentials
//! are stored in plaintext, verification codes are returned to the caller
//! instead of being emailed, and nothing here is a trust boundary.
//!
//! [`Identity`]: devterm_types::Identity

mod error;
mod mock;
mod provider;

pub use error::{IdentityError, IdentityResult};
pub use mock::MockIdentityProvider;
pub use provider::IdentityProvider;
