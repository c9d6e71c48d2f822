use devterm_types::Identity;

/// The current session: at most one signed-in identity at a time.
///
/// Explicit context object rather than process-wide state — the engine owns
/// one and consults it before every store mutation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    /// Creates a signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes `identity` as the current one, replacing any previous.
    pub fn sign_in(&mut self, identity: Identity) {
        self.current = Some(identity);
    }

    /// Tears the session down.
    pub fn sign_out(&mut self) {
        self.current = None;
    }

    /// The signed-in identity, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
