use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gitlab_hooks::HookError;
use serde::Serialize;
use thiserror::Error;
use wecom_notifier::NotifyError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("startup configuration error: {0}")]
    Startup(#[source] NotifyError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / delivery ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("notification delivery failed: {0}")]
    Delivery(#[source] NotifyError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Delivery(_) => StatusCode::BAD_GATEWAY,
            AppError::Startup(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Startup(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Delivery(_) => "DELIVERY_FAILED",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<HookError> for AppError {
    fn from(err: HookError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
