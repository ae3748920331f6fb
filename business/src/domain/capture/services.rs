use async_trait::async_trait;

use super::errors::{CameraError, ExtractionError};
use super::model::{CameraFacing, Resolution, StillImage};

/// A live video stream handed out by a [`CameraDevice`].
///
/// The device stays reserved until [`CameraStream::stop`] is called.
#[async_trait]
pub trait CameraStream: Send {
    /// Native size of the frames the stream produces.
    fn resolution(&self) -> Resolution;

    /// Freezes the current frame at native resolution as a JPEG still.
    ///
    /// Decoding and encoding must not run on the async executor.
    async fn grab_still(&mut self) -> Result<StillImage, CameraError>;

    /// Stops all tracks and releases the device. Must be idempotent.
    fn stop(&mut self);

    fn is_live(&self) -> bool;
}

/// Service port for acquiring exclusive access to a camera.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn open(&self, facing: CameraFacing) -> Result<Box<dyn CameraStream>, CameraError>;
}

/// Text answer of the recognition service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResponse {
    pub text: String,
}

/// Service port for the external image-understanding model.
///
/// One request per still; no retries.
#[async_trait]
pub trait PriceRecognitionService: Send + Sync {
    async fn recognize(
        &self,
        image: &StillImage,
        instruction: &str,
    ) -> Result<RecognitionResponse, ExtractionError>;
}
