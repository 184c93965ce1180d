//! In-memory account directory.
//!
//! The directory owns all account state behind a single lock: registration
//! holds the write guard across its uniqueness check and insert, so two
//! concurrent registrations of the same username can never both succeed.
//! The directory is created once at startup and lives for the process
//! lifetime; a restart discards every account.

use serde::Serialize;
use tokio::sync::RwLock;

/// A registered account.
///
/// Secrets are stored and compared verbatim. A hardened deployment would
/// substitute a salted one-way hash; the stored value is never serialized.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: u64,
    pub username: String,
    pub secret: String,
}

/// Public view of an account, safe to serialize into responses.
/// There is deliberately no secret field on this type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("username already exists")]
    UsernameTaken,
    /// Covers both unknown username and wrong secret. The two cases are
    /// intentionally indistinguishable to callers so login responses
    /// cannot be used to enumerate usernames.
    #[error("invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug)]
struct DirectoryInner {
    accounts: Vec<Account>,
    next_id: u64,
}

/// The account store plus its id-assignment counter.
#[derive(Debug)]
pub struct AccountDirectory {
    inner: RwLock<DirectoryInner>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner {
                accounts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create an account with the next sequential id.
    ///
    /// Fails with `EmptyField` on an empty username or secret (trimming is
    /// the caller's concern) and `UsernameTaken` on a duplicate. The
    /// uniqueness check and insert run under one write guard.
    pub async fn register(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<Account, DirectoryError> {
        if username.is_empty() {
            return Err(DirectoryError::EmptyField { field: "username" });
        }
        if secret.is_empty() {
            return Err(DirectoryError::EmptyField { field: "password" });
        }

        let mut inner = self.inner.write().await;
        if inner.accounts.iter().any(|a| a.username == username) {
            return Err(DirectoryError::UsernameTaken);
        }

        let account = Account {
            id: inner.next_id,
            username: username.to_string(),
            secret: secret.to_string(),
        };
        inner.next_id += 1;
        inner.accounts.push(account.clone());

        Ok(account)
    }

    /// Snapshot of every account's public fields in insertion order.
    pub async fn list(&self) -> Vec<AccountSummary> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .iter()
            .map(|a| AccountSummary {
                id: a.id,
                username: a.username.clone(),
            })
            .collect()
    }

    /// Exact-match lookup. Linear scan; usernames are unique so first
    /// match is the only match.
    pub async fn find_by_username(&self, username: &str) -> Option<Account> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    /// Check a presented credential pair against the directory.
    ///
    /// Plain string equality on the stored secret, matching the observed
    /// behavior (not constant-time). Unknown username and mismatched
    /// secret both return the same generic error.
    pub async fn verify(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<Account, DirectoryError> {
        let account = self
            .find_by_username(username)
            .await
            .ok_or(DirectoryError::InvalidCredentials)?;
        if account.secret == secret {
            Ok(account)
        } else {
            Err(DirectoryError::InvalidCredentials)
        }
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}
