//! Where account lists come from.
//!
//! The request layer that talks to the account API implements
//! [`AccountSource`]; the core only awaits it.

use async_trait::async_trait;
use folio_shared::AppResult;

use super::types::Account;

/// Produces the account list to group.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Fetches the current account list.
    async fn accounts(&self) -> AppResult<Vec<Account>>;
}

/// An account source backed by a list already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticAccountSource {
    accounts: Vec<Account>,
}

impl StaticAccountSource {
    /// Wraps `accounts`.
    #[must_use]
    pub const fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountSource for StaticAccountSource {
    async fn accounts(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}
