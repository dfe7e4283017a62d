use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Texto do email não pode estar vazio";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Texto do email não pode estar vazio")]
    EmptyInput,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyInput => {
                error_body(StatusCode::BAD_REQUEST, "empty_input", EMPTY_INPUT_MESSAGE)
            }
            Self::Internal(error) => {
                tracing::error!(error = %format!("{error:#}"), "email analysis failed");
                internal_error_response()
            }
        }
    }
}

/// Generic 500 body; never carries internal detail.
pub fn internal_error_response() -> Response {
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        INTERNAL_ERROR_MESSAGE,
    )
}

fn error_body(status: StatusCode, error: &'static str, message: &'static str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "message": message
        })),
    )
        .into_response()
}
