//! Accounts-related HTTP API.
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::Router;
use axum::routing::get;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /accounts` goes to `list`, `POST /accounts` goes to `create`.
        .route("/", get(list::handler).post(create::handler))
        // `GET`, `PUT` and `DELETE` on `/accounts/{id}`.
        .route(
            "/{id}",
            get(get::handler).put(update::handler).delete(delete::handler),
        )
}
