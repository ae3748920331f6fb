use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::calculator::model::Calculator;
use business::domain::capture::errors::{CameraError, CaptureError};
use business::domain::capture::model::{ScannedPrice, StillImage};
use business::domain::capture::use_cases::extract_price::{ExtractPriceParams, ExtractPriceUseCase};
use business::domain::capture::use_cases::scan_price::ScanPriceUseCase;

use crate::api::discount::dto::{CalculatorFormRequest, CalculatorViewResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::price::dto::{ExtractPriceRequest, ExtractedPriceResponse};
use crate::api::price::error_mapper::ScanningNotConfigured;
use crate::api::tags::ApiTags;

/// Builds a fresh capture pipeline for each scan request.
pub type ScanPriceFactory = Arc<dyn Fn() -> Box<dyn ScanPriceUseCase> + Send + Sync>;

pub struct PriceApi {
    extract_use_case: Option<Arc<dyn ExtractPriceUseCase>>,
    new_scan: Option<ScanPriceFactory>,
}

impl PriceApi {
    /// Both handlers are optional; `None` means scanning is not configured.
    pub fn new(
        extract_use_case: Option<Arc<dyn ExtractPriceUseCase>>,
        new_scan: Option<ScanPriceFactory>,
    ) -> Self {
        Self {
            extract_use_case,
            new_scan,
        }
    }

    /// Drives a fresh pipeline through `start` then `capture` in one go.
    ///
    /// No pipeline outlives the request, so there is no stream to cancel
    /// afterwards: every failure path already leaves it `Idle` with the
    /// camera released.
    async fn run_scan(&self) -> Result<ScannedPrice, CaptureError> {
        let Some(new_scan) = &self.new_scan else {
            return Err(CameraError::UnsupportedPlatform.into());
        };

        let mut pipeline = new_scan();
        let outcome = match pipeline.start().await {
            Ok(()) => pipeline.capture().await,
            Err(err) => Err(err),
        };
        tracing::debug!(state = %pipeline.state(), "price scan finished");

        outcome
    }
}

/// Price tag capture API
#[OpenApi]
impl PriceApi {
    /// Read a price from a price tag photo
    ///
    /// Sends the still to the recognition service and parses the first
    /// decimal number in its answer.
    #[oai(path = "/prices/extract", method = "post", tag = "ApiTags::Prices")]
    async fn extract(&self, body: Json<ExtractPriceRequest>) -> ExtractPriceResponse {
        let Some(extract_use_case) = &self.extract_use_case else {
            let (_, json) = ScanningNotConfigured.into_error_response();
            return ExtractPriceResponse::ServiceUnavailable(json);
        };

        let image = match StillImage::from_base64(&body.0.image_base64) {
            Ok(image) => image,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ExtractPriceResponse::BadRequest(json);
            }
        };

        match extract_use_case.execute(ExtractPriceParams { image }).await {
            Ok(scanned) => ExtractPriceResponse::Ok(Json(scanned.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ExtractPriceResponse::UnprocessableEntity(json)
            }
        }
    }

    /// Scan a price tag with the server camera
    ///
    /// Opens the camera, captures one still and reads its price into the
    /// original price field of the submitted form. Failures are reported in
    /// the returned view and leave the form untouched.
    ///
    /// The whole scan happens within this request; there is no preview step
    /// for a client to cancel.
    #[oai(path = "/prices/scan", method = "post", tag = "ApiTags::Prices")]
    async fn scan(&self, body: Json<CalculatorFormRequest>) -> Json<CalculatorViewResponse> {
        let mut calculator = Calculator::from(body.0);
        calculator.begin_scan();

        let outcome = self.run_scan().await;
        calculator.finish_scan(outcome);

        Json(CalculatorViewResponse::from(&calculator))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractPriceResponse {
    #[oai(status = 200)]
    Ok(Json<ExtractedPriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    /// Scanning is not configured on this server
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
