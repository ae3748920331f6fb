use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pricing::engine;
use crate::domain::pricing::errors::ValidationError;
use crate::domain::pricing::model::PriceResult;
use crate::domain::pricing::use_cases::compute::{ComputeDiscountParams, ComputeDiscountUseCase};

pub struct ComputeDiscountUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComputeDiscountUseCase for ComputeDiscountUseCaseImpl {
    async fn execute(
        &self,
        params: ComputeDiscountParams,
    ) -> Result<Option<PriceResult>, ValidationError> {
        self.logger.debug(&format!(
            "Computing {} discount: price={:?} discount={:?}",
            params.kind, params.original_price, params.discount
        ));

        match engine::compute(&params.original_price, &params.discount, params.kind) {
            Ok(Some(result)) => {
                self.logger.info(&format!(
                    "Discount computed: final={} saved={}",
                    result.final_price, result.saved_amount
                ));
                Ok(Some(result))
            }
            Ok(None) => {
                self.logger.debug("Discount form incomplete, nothing to compute");
                Ok(None)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Discount rejected: {}", err));
                Err(err)
            }
        }
    }
}
