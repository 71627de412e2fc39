use std::sync::Arc;

use axum::extract::FromRef;

use crate::AppState;
use crate::account::validation::check;
use crate::account::{Account, AccountRepository};
use crate::error::Result;

/// Account manager.
///
/// Holds no state besides its repository handle.
#[derive(Clone)]
pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Create a new [`AccountService`].
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Underlying storage, to seed rows without validation.
    #[cfg(test)]
    pub(crate) fn repository(&self) -> &Arc<dyn AccountRepository> {
        &self.repo
    }

    /// Validate then store a new account.
    ///
    /// Any identifier sent by the caller is dropped: the store assigns it.
    pub async fn create(&self, account: Account) -> Result<Account> {
        check(&account)?;

        let account = self.repo.save(Account { id: None, ..account }).await?;
        tracing::info!(id = account.id, "account created");

        Ok(account)
    }

    /// List every account.
    pub async fn get_all(&self) -> Result<Vec<Account>> {
        let accounts = self.repo.find_all().await?;
        tracing::debug!(count = accounts.len(), "list accounts");

        Ok(accounts)
    }

    /// Find an account. `None` when absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        tracing::debug!(id, "find account");
        self.repo.find_by_id(id).await
    }

    /// Replace name, document and phone of an existing account.
    ///
    /// Returns `None` if no account exists at `id`.
    pub async fn update(
        &self,
        id: i64,
        account: Account,
    ) -> Result<Option<Account>> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        check(&account)?;

        let account = self
            .repo
            .save(Account {
                id: existing.id,
                name: account.name,
                document: account.document,
                phone: account.phone,
            })
            .await?;
        tracing::info!(id, "account updated");

        Ok(Some(account))
    }

    /// Delete an account. Deleting a missing account succeeds.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "account deleted");

        Ok(())
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(app_state: &AppState) -> AccountService {
        app_state.accounts.clone()
    }
}
