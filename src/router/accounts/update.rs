//! Replace name, document and phone of an account.

use axum::Json;
use axum::extract::State;

use crate::account::{Account, AccountService};
use crate::error::{Result, ServerError};
use crate::router::{AccountId, JsonBody};

pub async fn handler(
    State(accounts): State<AccountService>,
    AccountId(id): AccountId,
    JsonBody(body): JsonBody<Account>,
) -> Result<Json<Account>> {
    accounts
        .update(id, body)
        .await?
        .map(Json)
        .ok_or(ServerError::NotFound)
}
