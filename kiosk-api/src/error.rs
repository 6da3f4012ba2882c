use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use kiosk_catalog::RepositoryError;
use kiosk_order::OrderError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    /// An order referencing an unknown product number is a client input
    /// problem; infrastructure failures stay internal.
    pub fn from_order(err: OrderError) -> Self {
        match err {
            OrderError::ProductNotFound(_) => AppError::ValidationError(err.to_string()),
            other => AppError::Anyhow(anyhow::anyhow!(other)),
        }
    }

    pub fn storage(err: RepositoryError) -> Self {
        AppError::Anyhow(anyhow::anyhow!(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
