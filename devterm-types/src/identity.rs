use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated user.
///
/// Keyed by `email` (case-sensitive, as provided at signup). The persistence
/// layer scopes each user's dataset by this key. At most one identity is
/// current per engine at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub username: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}
