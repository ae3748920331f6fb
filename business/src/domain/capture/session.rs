use super::errors::CameraError;
use super::model::{Resolution, StillImage};
use super::services::CameraStream;

/// Exclusive hold on a camera stream.
///
/// Dropping the session stops every track, so the device is released on all
/// exit paths. [`CaptureSession::freeze`] and [`CaptureSession::release`]
/// consume the session for the same reason.
pub struct CaptureSession {
    stream: Box<dyn CameraStream>,
}

impl CaptureSession {
    pub fn new(stream: Box<dyn CameraStream>) -> Self {
        Self { stream }
    }

    pub fn resolution(&self) -> Resolution {
        self.stream.resolution()
    }

    pub fn is_live(&self) -> bool {
        self.stream.is_live()
    }

    /// Takes a still and releases the camera before returning.
    pub async fn freeze(mut self) -> Result<StillImage, CameraError> {
        let still = self.stream.grab_still().await;
        self.stream.stop();
        still
    }

    pub fn release(mut self) {
        self.stream.stop();
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if self.stream.is_live() {
            self.stream.stop();
        }
    }
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("resolution", &self.stream.resolution())
            .field("live", &self.stream.is_live())
            .finish()
    }
}
