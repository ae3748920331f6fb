/// Failures acquiring or reading the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("camera.permission_denied")]
    PermissionDenied,
    #[error("camera.device_not_found")]
    DeviceNotFound,
    #[error("camera.device_unavailable")]
    DeviceUnavailable,
    #[error("camera.unsupported_platform")]
    UnsupportedPlatform,
}

impl CameraError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => {
                "Camera permission denied. Please enable camera access in your settings to use this feature."
            }
            CameraError::DeviceNotFound => {
                "No camera found on your device. Please try another device or connect a camera."
            }
            CameraError::DeviceUnavailable => {
                "Could not access the camera. It might be in use by another application or there could be a driver issue."
            }
            CameraError::UnsupportedPlatform => "Camera access is not supported on this platform.",
        }
    }
}

/// Failures turning a captured still into a price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction.unparseable_response")]
    UnparseableResponse { raw: String },
    #[error("extraction.processing_failure")]
    ProcessingFailure,
}

impl ExtractionError {
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::UnparseableResponse { raw } => format!(
                "Could not automatically detect a valid price from \"{}\". Please enter it manually.",
                raw
            ),
            ExtractionError::ProcessingFailure => {
                "Failed to process image. Please try again.".to_string()
            }
        }
    }
}

/// An uploaded still that is not valid base64 image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("capture.invalid_image")]
pub struct InvalidImageError;

/// Error of a capture pipeline attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("capture.not_streaming")]
    NotStreaming,
}

impl CaptureError {
    pub fn user_message(&self) -> String {
        match self {
            CaptureError::Camera(err) => err.user_message().to_string(),
            CaptureError::Extraction(err) => err.user_message(),
            CaptureError::NotStreaming => "Open the camera before capturing a price.".to_string(),
        }
    }
}
