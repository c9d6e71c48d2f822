use crate::error::{IdentityError, IdentityResult};
use crate::provider::IdentityProvider;
use async_trait::async_trait;
use devterm_storage::ProfileStore;
use devterm_types::Identity;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::warn;

const ACCOUNTS_KEY: &str = "devterm_users_db";

/// One registered account. Plaintext password — the mock "database" is not a
/// security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    email: String,
    username: String,
    password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodePurpose {
    Signup,
    Reset,
}

/// A verification code issued but not yet redeemed. Pending signups also
/// carry the profile data to register once the code checks out.
#[derive(Debug, Clone)]
struct PendingCode {
    code: String,
    purpose: CodePurpose,
    username: String,
    password: String,
}

/// Demo identity provider simulating the whole auth flow locally.
///
/// Accounts live in a profile-store slot; verification codes are held in
/// memory only and returned to the caller (no email delivery exists).
pub struct MockIdentityProvider {
    store: Arc<ProfileStore>,
    pending: Mutex<HashMap<String, PendingCode>>,
}

impl MockIdentityProvider {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self {
            store,
            pending: Mutex::new(HashMap::new()),
        }
    }

    fn load_accounts(&self) -> IdentityResult<Vec<Account>> {
        match self.store.read_slot(ACCOUNTS_KEY)? {
            None => Ok(Vec::new()),
            Some(json) => match serde_json::from_str(&json) {
                Ok(accounts) => Ok(accounts),
                Err(e) => {
                    warn!(error = %e, "malformed accounts slot, treating as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    fn save_accounts(&self, accounts: &[Account]) -> IdentityResult<()> {
        let json = serde_json::to_string(accounts).map_err(devterm_storage::StorageError::from)?;
        self.store.write_slot(ACCOUNTS_KEY, &json)?;
        Ok(())
    }

    fn issue_code() -> String {
        rand::thread_rng().gen_range(100_000..=999_999).to_string()
    }

    fn check_code(&self, email: &str, code: &str, purpose: CodePurpose) -> IdentityResult<PendingCode> {
        let pending = self.pending.lock().unwrap();
        let entry = pending
            .get(email)
            .filter(|p| p.purpose == purpose)
            .ok_or(IdentityError::InvalidCode)?;
        if entry.code != code {
            return Err(IdentityError::InvalidCode);
        }
        Ok(entry.clone())
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn begin_signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> IdentityResult<String> {
        let accounts = self.load_accounts()?;
        if accounts.iter().any(|a| a.email == email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let code = Self::issue_code();
        self.pending.lock().unwrap().insert(
            email.to_string(),
            PendingCode {
                code: code.clone(),
                purpose: CodePurpose::Signup,
                username: username.to_string(),
                password: password.to_string(),
            },
        );
        Ok(code)
    }

    async fn complete_signup(&self, email: &str, code: &str) -> IdentityResult<Identity> {
        let pending = self.check_code(email, code, CodePurpose::Signup)?;

        let mut accounts = self.load_accounts()?;
        accounts.push(Account {
            email: email.to_string(),
            username: pending.username.clone(),
            password: pending.password,
        });
        self.save_accounts(&accounts)?;
        self.pending.lock().unwrap().remove(email);

        Ok(Identity::new(email, pending.username))
    }

    async fn log_in(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        let accounts = self.load_accounts()?;
        accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| Identity::new(a.email.clone(), a.username.clone()))
            .ok_or(IdentityError::InvalidCredentials)
    }

    async fn begin_password_reset(&self, email: &str) -> IdentityResult<String> {
        let accounts = self.load_accounts()?;
        let account = accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or(IdentityError::UnknownEmail)?;

        let code = Self::issue_code();
        self.pending.lock().unwrap().insert(
            email.to_string(),
            PendingCode {
                code: code.clone(),
                purpose: CodePurpose::Reset,
                username: account.username.clone(),
                password: String::new(),
            },
        );
        Ok(code)
    }

    async fn verify_reset_code(&self, email: &str, code: &str) -> IdentityResult<()> {
        self.check_code(email, code, CodePurpose::Reset)?;
        Ok(())
    }

    async fn complete_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> IdentityResult<()> {
        self.check_code(email, code, CodePurpose::Reset)?;

        let mut accounts = self.load_accounts()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.email == email)
            .ok_or(IdentityError::UnknownEmail)?;
        account.password = new_password.to_string();
        self.save_accounts(&accounts)?;
        self.pending.lock().unwrap().remove(email);
        Ok(())
    }
}
