use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User already exists with this email")]
    EmailAlreadyExists,
    #[error("Token is not valid")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("No token, authorization denied")]
    MissingAuthHeader,
    #[error("Invalid authorization header format")]
    InvalidAuthHeaderFormat,
    #[error("{0}")]
    Validation(String),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Password hashing error: {0}")]
    PasswordHashing(#[from] crate::auth::password::PasswordError),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AuthError::EmailAlreadyExists => (StatusCode::BAD_REQUEST, "email_already_exists"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "token_expired"),
            AuthError::MissingAuthHeader => (StatusCode::UNAUTHORIZED, "missing_token"),
            AuthError::InvalidAuthHeaderFormat => (StatusCode::UNAUTHORIZED, "invalid_token"),
            AuthError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AuthError::Jwt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "token_error"),
            AuthError::PasswordHashing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "password_error"),
            AuthError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status_and_kind().0
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        // Internal details go to the log, not the client
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "authentication request failed");
            "Server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": kind,
            "message": message,
        }));

        (status, body).into_response()
    }
}
