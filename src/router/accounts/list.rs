//! List every account.

use axum::Json;
use axum::extract::State;

use crate::account::{Account, AccountService};
use crate::error::Result;

pub async fn handler(
    State(accounts): State<AccountService>,
) -> Result<Json<Vec<Account>>> {
    Ok(Json(accounts.get_all().await?))
}
