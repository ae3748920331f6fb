use async_trait::async_trait;

use business::domain::capture::errors::CameraError;
use business::domain::capture::model::CameraFacing;
use business::domain::capture::services::{CameraDevice, CameraStream};

/// Camera for hosts without any capture capability.
pub struct UnsupportedCamera;

#[async_trait]
impl CameraDevice for UnsupportedCamera {
    async fn open(&self, _facing: CameraFacing) -> Result<Box<dyn CameraStream>, CameraError> {
        Err(CameraError::UnsupportedPlatform)
    }
}
