use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pricing::errors::ValidationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ValidationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: self.to_string(),
                detail: self.user_message().to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_validation_error_to_bad_request() {
        for err in [
            ValidationError::InvalidPrice,
            ValidationError::PercentageOutOfRange,
            ValidationError::NegativeDiscount,
            ValidationError::DiscountExceedsPrice,
        ] {
            let (status, json) = err.into_error_response();

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json.0.name, "ValidationError");
            assert!(json.0.message.starts_with("pricing."));
        }
    }
}
