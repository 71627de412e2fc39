//! Get an account by identifier.

use axum::Json;
use axum::extract::State;

use crate::account::{Account, AccountService};
use crate::error::{Result, ServerError};
use crate::router::AccountId;

pub async fn handler(
    State(accounts): State<AccountService>,
    AccountId(id): AccountId,
) -> Result<Json<Account>> {
    accounts
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ServerError::NotFound)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::account::Account;
    use crate::router::accounts::tests::{insert, read_body};
    use crate::*;

    #[tokio::test]
    async fn test_get_handler() {
        let state = router::state();
        let app = app(state.clone());
        let account = insert(&state, "Test").await;
        let id = account.id.unwrap();

        let path = format!("/accounts/{id}");
        let response =
            make_request(app, Method::GET, &path, String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Account = read_body(response).await;
        assert_eq!(body, account);
    }

    #[tokio::test]
    async fn test_get_missing_account() {
        let app = app(router::state());

        let response =
            make_request(app, Method::GET, "/accounts/404", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = read_body(response).await;
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "account not found");
    }

    #[tokio::test]
    async fn test_get_non_numeric_id() {
        let app = app(router::state());

        let response =
            make_request(app, Method::GET, "/accounts/abc", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = read_body(response).await;
        assert_eq!(body["statusCode"], 400);
        assert!(body["message"].is_string());
    }
}
