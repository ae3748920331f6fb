use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Error family, e.g. "ValidationError"
    pub name: String,
    /// Code-style identifier, e.g. "pricing.invalid_price"
    pub message: String,
    /// Text meant for the user
    pub detail: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
