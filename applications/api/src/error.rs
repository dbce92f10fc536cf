/// API error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,

    /// A data route could not produce its rows
    #[error("{context}: {details}")]
    Fetch {
        context: &'static str,
        details: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn fetch(context: &'static str, err: impl Display) -> Self {
        ApiError::Fetch {
            context,
            details: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found", None),
            ApiError::Fetch { context, details } => {
                tracing::error!(context, %details, "Query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, context, Some(details))
            }
            ApiError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error",
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_fixed_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"error":"Not Found"}"#);
    }

    #[tokio::test]
    async fn fetch_failure_carries_details() {
        let response = ApiError::fetch("Failed to fetch users", "no such table: users")
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Failed to fetch users","details":"no such table: users"}"#
        );
    }
}
