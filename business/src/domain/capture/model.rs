use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::InvalidImageError;

/// Instruction sent with every captured still.
pub const PRICE_INSTRUCTION: &str = "Extract only the numerical value of the largest price tag visible in this image. Do not include any currency symbols, commas, or text. For example, if you see '$19.99', return '19.99'.";

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Which way the requested camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    /// Rear camera, pointed at the price tag.
    Environment,
    User,
}

/// Lifecycle of one scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Requesting,
    Streaming,
    /// A still was taken and is being processed.
    Captured,
    Error,
}

impl CaptureState {
    /// True while a camera request or extraction is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, CaptureState::Requesting | CaptureState::Captured)
    }
}

impl std::fmt::Display for CaptureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "idle"),
            CaptureState::Requesting => write!(f, "requesting"),
            CaptureState::Streaming => write!(f, "streaming"),
            CaptureState::Captured => write!(f, "captured"),
            CaptureState::Error => write!(f, "error"),
        }
    }
}

/// Frame dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// A frozen frame, JPEG encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StillImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// Native frame size, unknown for uploaded images.
    pub resolution: Option<Resolution>,
}

impl StillImage {
    pub fn jpeg(bytes: Vec<u8>, resolution: Resolution) -> Self {
        Self {
            bytes,
            mime_type: JPEG_MIME_TYPE.to_string(),
            resolution: Some(resolution),
        }
    }

    /// Accepts raw base64 or a `data:image/...;base64,` URL.
    pub fn from_base64(raw: &str) -> Result<Self, InvalidImageError> {
        let (mime_type, payload) = match regex::Regex::new(r"^data:(image/[a-z]+);base64,")
            .ok()
            .and_then(|re| re.captures(raw).map(|c| (c[1].to_string(), c[0].len())))
        {
            Some((mime, prefix_len)) => (mime, &raw[prefix_len..]),
            None => (JPEG_MIME_TYPE.to_string(), raw),
        };

        let clean: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if clean.is_empty() {
            return Err(InvalidImageError);
        }

        let bytes = STANDARD.decode(clean).map_err(|_| InvalidImageError)?;

        Ok(Self {
            bytes,
            mime_type,
            resolution: None,
        })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// A price read off a still, with the service response it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedPrice {
    pub price: f64,
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_raw_base64() {
        let image = StillImage::from_base64("/9j/4AA=").unwrap();

        assert_eq!(image.bytes, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00]);
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.resolution, None);
    }

    #[test]
    fn should_strip_data_url_prefix_and_whitespace() {
        let image = StillImage::from_base64("data:image/png;base64,iVBO\nRw0K").unwrap();

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(&image.bytes[1..4], b"PNG");
    }

    #[test]
    fn should_reject_invalid_base64() {
        assert_eq!(StillImage::from_base64("not base64!"), Err(InvalidImageError));
        assert_eq!(StillImage::from_base64("data:image/jpeg;base64,"), Err(InvalidImageError));
    }

    #[test]
    fn should_encode_back_to_base64() {
        let image = StillImage::jpeg(vec![1, 2, 3], Resolution { width: 1, height: 1 });
        assert_eq!(image.to_base64(), "AQID");
    }

    #[test]
    fn should_report_busy_only_while_requesting_or_processing() {
        assert!(CaptureState::Requesting.is_busy());
        assert!(CaptureState::Captured.is_busy());
        assert!(!CaptureState::Idle.is_busy());
        assert!(!CaptureState::Streaming.is_busy());
        assert!(!CaptureState::Error.is_busy());
    }
}
