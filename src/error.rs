//! Error handler for bank-api.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sqlx::Error as SQLxError;
use thiserror::Error;

use crate::account::validation::Violation;

pub type Result<T> = std::result::Result<T, ServerError>;

const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Validation(#[from] Violation),

    #[error("account not found")]
    NotFound,

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error("SQL request failed: {0}")]
    Sql(#[from] SQLxError),
}

/// Body returned on every failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    status_code: u16,
    message: String,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status_code = code.as_u16();
        self
    }

    /// Update `message` field.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Transform [`ResponseError`] into axum [`Response`].
    pub fn into_response(
        self,
    ) -> std::result::Result<Response, axum::http::Error> {
        if let Ok(body) = serde_json::to_string(&self) {
            Response::builder()
                .status(self.status_code)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
        } else {
            Ok(internal_server_error())
        }
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: INTERNAL_SERVER_ERROR.to_owned(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let response = ResponseError::default()
            .message(self.to_string())
            .status(StatusCode::BAD_REQUEST);

        let response = match &self {
            ServerError::Validation(_) | ServerError::Path(_) => response,

            ServerError::NotFound => response.status(StatusCode::NOT_FOUND),

            ServerError::Json(rejection) => match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    response.status(StatusCode::UNSUPPORTED_MEDIA_TYPE)
                },
                _ => response.message(rejection.body_text()),
            },

            ServerError::Sql(err) => {
                tracing::error!(error = %err, "server returned 500 status");
                ResponseError::default()
            },
        };

        response
            .into_response()
            .unwrap_or_else(|_| internal_server_error())
    }
}

fn internal_server_error() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(
            serde_json::json!({
                "statusCode": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "message": INTERNAL_SERVER_ERROR,
            })
            .to_string()
            .into(),
        )
        .unwrap_or_else(|_| Response::new(INTERNAL_SERVER_ERROR.into()))
}
