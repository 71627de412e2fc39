//! Delete an account.

use axum::extract::State;

use crate::account::AccountService;
use crate::error::Result;
use crate::router::AccountId;

/// Succeeds whether or not the account existed.
pub async fn handler(
    State(accounts): State<AccountService>,
    AccountId(id): AccountId,
) -> Result<()> {
    accounts.delete(id).await
}
