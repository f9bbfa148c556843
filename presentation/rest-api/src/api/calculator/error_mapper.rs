use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::CalculationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CalculationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            CalculationError::InvalidInput(field) => format!("calculation.invalid_input.{field}"),
            CalculationError::UnknownCategory(_) => "category.unknown".to_string(),
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message,
            }),
        )
    }
}
