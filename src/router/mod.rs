//! HTTP routes.
pub mod accounts;
pub mod status;

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ServerError;

/// JSON body whose rejections are rendered as [`ServerError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct JsonBody<T>(pub T);

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct AccountId(pub i64);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// State backed by an empty in-memory repository.
#[cfg(test)]
pub fn state() -> crate::AppState {
    use std::sync::Arc;

    use crate::account::{AccountService, MemoryAccountRepository};

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        accounts: AccountService::new(Arc::new(MemoryAccountRepository::new())),
        metrics: None,
    }
}
