use async_trait::async_trait;

use crate::domain::capture::errors::ExtractionError;
use crate::domain::capture::model::{ScannedPrice, StillImage};

pub struct ExtractPriceParams {
    pub image: StillImage,
}

#[async_trait]
pub trait ExtractPriceUseCase: Send + Sync {
    async fn execute(&self, params: ExtractPriceParams) -> Result<ScannedPrice, ExtractionError>;
}
