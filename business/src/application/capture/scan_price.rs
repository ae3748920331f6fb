use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::capture::errors::{CameraError, CaptureError, ExtractionError};
use crate::domain::capture::model::{CameraFacing, CaptureState, ScannedPrice};
use crate::domain::capture::services::CameraDevice;
use crate::domain::capture::session::CaptureSession;
use crate::domain::capture::use_cases::extract_price::{ExtractPriceParams, ExtractPriceUseCase};
use crate::domain::capture::use_cases::scan_price::ScanPriceUseCase;
use crate::domain::logger::Logger;

/// Camera scan state machine.
///
/// `Idle -> Requesting -> Streaming -> Captured -> Idle`. Failures pass
/// through `Error` and settle back on `Idle`. The open stream lives in a
/// [`CaptureSession`], so leaving `Streaming` by any path releases the camera.
pub struct ScanPriceUseCaseImpl {
    camera: Arc<dyn CameraDevice>,
    extractor: Arc<dyn ExtractPriceUseCase>,
    logger: Arc<dyn Logger>,
    state: CaptureState,
    session: Option<CaptureSession>,
}

impl ScanPriceUseCaseImpl {
    pub fn new(
        camera: Arc<dyn CameraDevice>,
        extractor: Arc<dyn ExtractPriceUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            camera,
            extractor,
            logger,
            state: CaptureState::Idle,
            session: None,
        }
    }

    fn transition(&mut self, next: CaptureState) {
        self.logger
            .debug(&format!("Capture state: {} -> {}", self.state, next));
        self.state = next;
    }

    fn fail(&mut self, err: CaptureError) -> CaptureError {
        self.transition(CaptureState::Error);
        self.logger.warn(&format!("Price scan failed: {}", err));
        if let Some(session) = self.session.take() {
            session.release();
        }
        self.transition(CaptureState::Idle);
        err
    }
}

#[async_trait]
impl ScanPriceUseCase for ScanPriceUseCaseImpl {
    fn state(&self) -> CaptureState {
        self.state
    }

    async fn start(&mut self) -> Result<(), CaptureError> {
        if self.state != CaptureState::Idle {
            // Only one stream at a time; the active one is left alone.
            self.logger.warn(&format!(
                "Camera requested while pipeline is {}",
                self.state
            ));
            return Err(CameraError::DeviceUnavailable.into());
        }

        self.transition(CaptureState::Requesting);
        self.logger.info("Requesting environment camera");

        match self.camera.open(CameraFacing::Environment).await {
            Ok(stream) => {
                let session = CaptureSession::new(stream);
                let resolution = session.resolution();
                self.logger.info(&format!(
                    "Camera streaming at {}x{}",
                    resolution.width, resolution.height
                ));
                self.session = Some(session);
                self.transition(CaptureState::Streaming);
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    async fn capture(&mut self) -> Result<ScannedPrice, CaptureError> {
        let Some(session) = self.session.take() else {
            return Err(CaptureError::NotStreaming);
        };

        let image = match session.freeze().await {
            Ok(image) => image,
            Err(err) => {
                self.logger
                    .error(&format!("Could not freeze camera frame: {}", err));
                return Err(self.fail(ExtractionError::ProcessingFailure.into()));
            }
        };
        self.transition(CaptureState::Captured);

        match self.extractor.execute(ExtractPriceParams { image }).await {
            Ok(scanned) => {
                self.transition(CaptureState::Idle);
                Ok(scanned)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            self.logger.info("Price scan cancelled");
            session.release();
        }
        if self.state != CaptureState::Idle {
            self.transition(CaptureState::Idle);
        }
    }
}
