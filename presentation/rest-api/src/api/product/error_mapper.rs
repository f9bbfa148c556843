use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::ArticleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.article_empty",
            ),
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::ExpiryDateInPast => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.expiry_date_in_past",
            ),
            ProductError::UnknownCategory(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.unknown",
            ),
            ProductError::UnknownFilter(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.unknown_filter",
            ),
            ProductError::Duplicated => (StatusCode::CONFLICT, "Conflict", "product.duplicated"),
            ProductError::Conflict => (StatusCode::CONFLICT, "Conflict", "product.conflict"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "product.forbidden"),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
