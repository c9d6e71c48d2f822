use crate::error::IdentityResult;
use async_trait::async_trait;
use devterm_types::Identity;

/// Abstract authentication capability.
///
/// Two-step flows (signup, password reset) issue a verification code in the
/// `begin_*` call and check it in the later step. A `begin_*` call may be
/// repeated to reissue a fresh code (resend), invalidating the previous one.
/// Implementations with real email delivery would send the code out of band;
/// the demo provider returns it to the caller for display.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Starts registration. Fails on a duplicate email; returns the
    /// verification code issued for this signup.
    async fn begin_signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> IdentityResult<String>;

    /// Completes registration by checking the verification code. On success
    /// the account is persisted and the new identity returned.
    async fn complete_signup(&self, email: &str, code: &str) -> IdentityResult<Identity>;

    /// Authenticates against a registered account.
    async fn log_in(&self, email: &str, password: &str) -> IdentityResult<Identity>;

    /// Starts a password reset for a registered email; returns the issued
    /// verification code.
    async fn begin_password_reset(&self, email: &str) -> IdentityResult<String>;

    /// Checks a reset code without consuming it (the new password is
    /// collected in a separate step).
    async fn verify_reset_code(&self, email: &str, code: &str) -> IdentityResult<()>;

    /// Completes the reset: checks the code and replaces the password.
    async fn complete_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> IdentityResult<()>;
}
