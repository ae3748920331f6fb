use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::capture::errors::{
    CameraError, CaptureError, ExtractionError, InvalidImageError,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Price scanning was requested but no recognition service is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanningNotConfigured;

impl IntoErrorResponse for ScanningNotConfigured {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                name: "ServiceUnavailable".to_string(),
                message: "scan.not_configured".to_string(),
                detail: "Price scanning is not configured on this server.".to_string(),
            }),
        )
    }
}

impl IntoErrorResponse for ExtractionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                name: "ExtractionError".to_string(),
                message: self.to_string(),
                detail: self.user_message(),
            }),
        )
    }
}

impl IntoErrorResponse for CameraError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match self {
            CameraError::PermissionDenied => StatusCode::FORBIDDEN,
            CameraError::DeviceNotFound => StatusCode::NOT_FOUND,
            CameraError::DeviceUnavailable => StatusCode::CONFLICT,
            CameraError::UnsupportedPlatform => StatusCode::SERVICE_UNAVAILABLE,
        };

        (
            status,
            Json(ErrorResponse {
                name: "CameraError".to_string(),
                message: self.to_string(),
                detail: self.user_message().to_string(),
            }),
        )
    }
}

impl IntoErrorResponse for CaptureError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CaptureError::Camera(err) => err.into_error_response(),
            CaptureError::Extraction(err) => err.into_error_response(),
            CaptureError::NotStreaming => (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    name: "CaptureError".to_string(),
                    message: self.to_string(),
                    detail: self.user_message(),
                }),
            ),
        }
    }
}

impl IntoErrorResponse for InvalidImageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: self.to_string(),
                detail: "The uploaded image could not be read.".to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_unconfigured_scanning_without_mentioning_camera() {
        let (status, json) = ScanningNotConfigured.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.message, "scan.not_configured");
        assert!(!json.0.detail.to_lowercase().contains("camera"));
    }

    #[test]
    fn should_include_raw_text_in_unparseable_detail() {
        let (status, json) = ExtractionError::UnparseableResponse {
            raw: "no price found".to_string(),
        }
        .into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "extraction.unparseable_response");
        assert!(json.0.detail.contains("no price found"));
    }

    #[test]
    fn should_map_camera_errors_to_distinct_statuses() {
        let (denied, _) = CameraError::PermissionDenied.into_error_response();
        let (missing, _) = CameraError::DeviceNotFound.into_error_response();
        let (busy, _) = CameraError::DeviceUnavailable.into_error_response();
        let (unsupported, _) = CameraError::UnsupportedPlatform.into_error_response();

        assert_eq!(denied, StatusCode::FORBIDDEN);
        assert_eq!(missing, StatusCode::NOT_FOUND);
        assert_eq!(busy, StatusCode::CONFLICT);
        assert_eq!(unsupported, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn should_unwrap_capture_error_to_inner_mapping() {
        let (status, json) =
            CaptureError::Camera(CameraError::PermissionDenied).into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json.0.message, "camera.permission_denied");
    }
}
