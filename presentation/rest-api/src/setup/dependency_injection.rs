use std::sync::Arc;

use logger::TracingLogger;

use camera::{FileCamera, UnsupportedCamera};
use gemini::client::GeminiClient;
use gemini::price_recognizer::PriceRecognizerGemini;

use business::application::capture::extract_price::ExtractPriceUseCaseImpl;
use business::application::capture::scan_price::ScanPriceUseCaseImpl;
use business::application::pricing::compute::ComputeDiscountUseCaseImpl;
use business::domain::capture::services::CameraDevice;
use business::domain::capture::use_cases::extract_price::ExtractPriceUseCase;
use business::domain::capture::use_cases::scan_price::ScanPriceUseCase;
use business::domain::logger::Logger;

use crate::api::price::routes::ScanPriceFactory;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub discount_api: crate::api::discount::routes::DiscountApi,
    pub price_api: crate::api::price::routes::PriceApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(config.gemini.scan_enabled());

        // Pricing use cases
        let compute_use_case = Arc::new(ComputeDiscountUseCaseImpl {
            logger: logger.clone(),
        });

        // Capture use cases, only when the recognition service is configured
        let extract_use_case: Option<Arc<dyn ExtractPriceUseCase>> =
            config.gemini.api_key.clone().map(|api_key| {
                let gemini_client = GeminiClient::new(
                    api_key,
                    config.gemini.model.clone(),
                    config.gemini.timeout,
                )
                .with_base_url(config.gemini.base_url.clone());
                let recognizer = Arc::new(PriceRecognizerGemini::new(gemini_client));

                Arc::new(ExtractPriceUseCaseImpl {
                    recognizer,
                    logger: logger.clone(),
                }) as Arc<dyn ExtractPriceUseCase>
            });

        let camera: Arc<dyn CameraDevice> = match &config.camera.frame_path {
            Some(path) => {
                logger.info(&format!("Server camera reads frames from {}", path.display()));
                Arc::new(FileCamera::new(path.clone()))
            }
            None => Arc::new(UnsupportedCamera),
        };

        let new_scan: Option<ScanPriceFactory> = extract_use_case.clone().map(|extractor| {
            let logger = logger.clone();
            Arc::new(move || -> Box<dyn ScanPriceUseCase> {
                Box::new(ScanPriceUseCaseImpl::new(
                    camera.clone(),
                    extractor.clone(),
                    logger.clone(),
                ))
            }) as ScanPriceFactory
        });

        if extract_use_case.is_none() {
            logger.warn("GEMINI_API_KEY not set, price scanning is disabled");
        }

        // API layer
        let discount_api = crate::api::discount::routes::DiscountApi::new(compute_use_case);
        let price_api = crate::api::price::routes::PriceApi::new(extract_use_case, new_scan);

        Self {
            health_api,
            discount_api,
            price_api,
        }
    }
}
