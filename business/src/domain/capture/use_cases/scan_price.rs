use async_trait::async_trait;

use crate::domain::capture::errors::CaptureError;
use crate::domain::capture::model::{CaptureState, ScannedPrice};

/// Drives one camera scan: open the camera, capture a still, read the price.
///
/// Every method leaves the pipeline either `Streaming` (after a successful
/// `start`) or `Idle`, and the camera is only held while `Streaming`.
#[async_trait]
pub trait ScanPriceUseCase: Send {
    fn state(&self) -> CaptureState;

    /// `Idle -> Requesting -> Streaming`.
    async fn start(&mut self) -> Result<(), CaptureError>;

    /// `Streaming -> Captured -> Idle`, releasing the camera before the
    /// recognition call.
    async fn capture(&mut self) -> Result<ScannedPrice, CaptureError>;

    /// Closes the camera without calling the recognition service.
    fn cancel(&mut self);
}
