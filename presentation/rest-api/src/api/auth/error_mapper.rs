use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::UsernameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.username_empty",
            ),
            UserError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "user.name_empty"),
            UserError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.password_too_short",
            ),
            UserError::AlreadyExists => (StatusCode::CONFLICT, "Conflict", "user.already_exists"),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.invalid_credentials",
            ),
            UserError::HashingFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.hashing_failed",
            ),
            UserError::SessionFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.session_failed",
            ),
            UserError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
