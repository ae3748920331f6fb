use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageReader};

use business::domain::capture::errors::CameraError;
use business::domain::capture::model::{CameraFacing, Resolution, StillImage};
use business::domain::capture::services::{CameraDevice, CameraStream};

const JPEG_QUALITY: u8 = 92;

/// Environment-facing camera that exposes its latest frame as an image file,
/// as capture daemons and webcam bridges commonly do.
///
/// Only one stream can be open at a time.
pub struct FileCamera {
    frame_path: PathBuf,
    in_use: Arc<AtomicBool>,
}

impl FileCamera {
    pub fn new(frame_path: impl Into<PathBuf>) -> Self {
        Self {
            frame_path: frame_path.into(),
            in_use: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn frame_path(&self) -> &Path {
        &self.frame_path
    }
}

#[async_trait]
impl CameraDevice for FileCamera {
    async fn open(&self, facing: CameraFacing) -> Result<Box<dyn CameraStream>, CameraError> {
        if facing != CameraFacing::Environment {
            return Err(CameraError::DeviceNotFound);
        }

        let metadata = tokio::fs::metadata(&self.frame_path)
            .await
            .map_err(|err| camera_error(err.kind()))?;
        if !metadata.is_file() {
            return Err(CameraError::DeviceNotFound);
        }

        if self
            .in_use
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(path = %self.frame_path.display(), "camera busy");
            return Err(CameraError::DeviceUnavailable);
        }

        let path = self.frame_path.clone();
        let probed = tokio::task::spawn_blocking(move || probe_resolution(&path))
            .await
            .unwrap_or(Err(CameraError::DeviceUnavailable));

        match probed {
            Ok(resolution) => {
                tracing::debug!(
                    path = %self.frame_path.display(),
                    width = resolution.width,
                    height = resolution.height,
                    "camera stream opened"
                );
                Ok(Box::new(FileStream {
                    path: self.frame_path.clone(),
                    resolution,
                    in_use: self.in_use.clone(),
                    live: true,
                }))
            }
            Err(err) => {
                self.in_use.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }
}

struct FileStream {
    path: PathBuf,
    resolution: Resolution,
    in_use: Arc<AtomicBool>,
    live: bool,
}

#[async_trait]
impl CameraStream for FileStream {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    async fn grab_still(&mut self) -> Result<StillImage, CameraError> {
        if !self.live {
            return Err(CameraError::DeviceUnavailable);
        }

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || encode_still(&path))
            .await
            .unwrap_or(Err(CameraError::DeviceUnavailable))
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.in_use.store(false, Ordering::SeqCst);
            tracing::debug!(path = %self.path.display(), "camera stream stopped");
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

impl Drop for FileStream {
    fn drop(&mut self) {
        self.stop();
    }
}

fn probe_resolution(path: &Path) -> Result<Resolution, CameraError> {
    let (width, height) = ImageReader::open(path)
        .map_err(|err| camera_error(err.kind()))?
        .with_guessed_format()
        .map_err(|err| camera_error(err.kind()))?
        .into_dimensions()
        .map_err(image_error)?;

    Ok(Resolution { width, height })
}

/// Decodes the frame file and re-encodes it as JPEG at its native size.
fn encode_still(path: &Path) -> Result<StillImage, CameraError> {
    let frame = ImageReader::open(path)
        .map_err(|err| camera_error(err.kind()))?
        .with_guessed_format()
        .map_err(|err| camera_error(err.kind()))?
        .decode()
        .map_err(image_error)?
        .into_rgb8();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode_image(&frame)
        .map_err(image_error)?;

    Ok(StillImage::jpeg(
        bytes,
        Resolution {
            width: frame.width(),
            height: frame.height(),
        },
    ))
}

fn camera_error(kind: ErrorKind) -> CameraError {
    match kind {
        ErrorKind::NotFound => CameraError::DeviceNotFound,
        ErrorKind::PermissionDenied => CameraError::PermissionDenied,
        _ => CameraError::DeviceUnavailable,
    }
}

fn image_error(err: ImageError) -> CameraError {
    match err {
        ImageError::IoError(io) => camera_error(io.kind()),
        _ => CameraError::DeviceUnavailable,
    }
}
