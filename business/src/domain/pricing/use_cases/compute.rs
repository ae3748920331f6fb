use async_trait::async_trait;

use crate::domain::pricing::errors::ValidationError;
use crate::domain::pricing::model::{DiscountKind, PriceResult};

pub struct ComputeDiscountParams {
    pub original_price: String,
    pub discount: String,
    pub kind: DiscountKind,
}

/// `Ok(None)` means the form is not filled in yet.
#[async_trait]
pub trait ComputeDiscountUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ComputeDiscountParams,
    ) -> Result<Option<PriceResult>, ValidationError>;
}
