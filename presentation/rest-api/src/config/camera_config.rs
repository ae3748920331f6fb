use std::path::PathBuf;

/// Server-side camera used by `/prices/scan`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub frame_path: Option<PathBuf>,
}

impl CameraConfig {
    /// Environment variables:
    /// - CAMERA_FRAME_PATH: image file holding the camera's latest frame
    ///   (server-side capture unsupported when unset)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let frame_path = get("CAMERA_FRAME_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self { frame_path }
    }
}
