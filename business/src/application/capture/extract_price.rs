use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::capture::errors::ExtractionError;
use crate::domain::capture::model::{PRICE_INSTRUCTION, ScannedPrice};
use crate::domain::capture::price_parser::parse_price;
use crate::domain::capture::services::PriceRecognitionService;
use crate::domain::capture::use_cases::extract_price::{ExtractPriceParams, ExtractPriceUseCase};
use crate::domain::logger::Logger;

pub struct ExtractPriceUseCaseImpl {
    pub recognizer: Arc<dyn PriceRecognitionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractPriceUseCase for ExtractPriceUseCaseImpl {
    async fn execute(&self, params: ExtractPriceParams) -> Result<ScannedPrice, ExtractionError> {
        self.logger.info(&format!(
            "Extracting price from {} still ({} bytes)",
            params.image.mime_type,
            params.image.bytes.len()
        ));

        let response = match self
            .recognizer
            .recognize(&params.image, PRICE_INSTRUCTION)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                self.logger
                    .error(&format!("Price recognition failed: {}", err));
                return Err(err);
            }
        };

        match parse_price(&response.text) {
            Ok(scanned) => {
                self.logger
                    .info(&format!("Price extracted: {}", scanned.price));
                Ok(scanned)
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "No usable price in recognition response: {:?}",
                    response.text
                ));
                Err(err)
            }
        }
    }
}
