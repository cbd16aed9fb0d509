use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::repositories::RepositoryError;
use crate::services::{AuthServiceError, UserServiceError};

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures a handler cannot recover into a rendered page.
///
/// Credential problems never reach this type; the login handler renders
/// them inline.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthServiceError),

    #[error("User service error: {0}")]
    User(#[from] UserServiceError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
            .into_response()
    }
}
