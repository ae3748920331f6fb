use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::pricing::use_cases::compute::{ComputeDiscountParams, ComputeDiscountUseCase};

use crate::api::discount::dto::{CalculatorFormRequest, DiscountResultResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DiscountApi {
    compute_use_case: Arc<dyn ComputeDiscountUseCase>,
}

impl DiscountApi {
    pub fn new(compute_use_case: Arc<dyn ComputeDiscountUseCase>) -> Self {
        Self { compute_use_case }
    }
}

/// Discount calculator API
#[OpenApi]
impl DiscountApi {
    /// Compute a discounted price
    ///
    /// Returns the final price and the amount saved. Responds with 204 while
    /// either field is still empty or not a number.
    #[oai(path = "/discounts/compute", method = "post", tag = "ApiTags::Discounts")]
    async fn compute(&self, body: Json<CalculatorFormRequest>) -> ComputeDiscountResponse {
        let params = ComputeDiscountParams {
            original_price: body.0.original_price,
            discount: body.0.discount,
            kind: body.0.kind.into(),
        };

        match self.compute_use_case.execute(params).await {
            Ok(Some(result)) => ComputeDiscountResponse::Ok(Json(result.into())),
            Ok(None) => ComputeDiscountResponse::Idle,
            Err(err) => {
                let (_, json) = err.into_error_response();
                ComputeDiscountResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ComputeDiscountResponse {
    #[oai(status = 200)]
    Ok(Json<DiscountResultResponse>),
    /// The form is not complete yet
    #[oai(status = 204)]
    Idle,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
