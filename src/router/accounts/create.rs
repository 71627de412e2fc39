//! Create an account.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::account::{Account, AccountService};
use crate::error::Result;
use crate::router::JsonBody;

/// Handler to create account.
pub async fn handler(
    State(accounts): State<AccountService>,
    JsonBody(body): JsonBody<Account>,
) -> Result<(StatusCode, Json<Account>)> {
    let account = accounts.create(body).await?;

    Ok((StatusCode::CREATED, Json(account)))
}
