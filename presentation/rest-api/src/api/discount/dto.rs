use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::calculator::model::{Calculator, CalculatorDisplay};
use business::domain::pricing::format::{DEFAULT_CURRENCY_SYMBOL, format_amount};
use business::domain::pricing::model::{DiscountKind, PriceResult};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum DiscountKindDto {
    #[oai(rename = "percentage")]
    Percentage,
    #[oai(rename = "fixed")]
    Fixed,
}

impl From<DiscountKind> for DiscountKindDto {
    fn from(kind: DiscountKind) -> Self {
        match kind {
            DiscountKind::Percentage => DiscountKindDto::Percentage,
            DiscountKind::Fixed => DiscountKindDto::Fixed,
        }
    }
}

impl From<DiscountKindDto> for DiscountKind {
    fn from(dto: DiscountKindDto) -> Self {
        match dto {
            DiscountKindDto::Percentage => DiscountKind::Percentage,
            DiscountKindDto::Fixed => DiscountKind::Fixed,
        }
    }
}

/// The calculator form as the client holds it.
#[derive(Debug, Clone, Object)]
pub struct CalculatorFormRequest {
    /// Original price as typed, e.g. "100"
    #[oai(default)]
    pub original_price: String,
    /// Discount as typed; a percentage or an amount depending on `kind`
    #[oai(default)]
    pub discount: String,
    /// How the discount is applied
    pub kind: DiscountKindDto,
}

impl From<CalculatorFormRequest> for Calculator {
    fn from(form: CalculatorFormRequest) -> Self {
        Calculator::from_fields(form.original_price, form.discount, form.kind.into())
    }
}

#[derive(Debug, Clone, Object)]
pub struct DiscountResultResponse {
    pub final_price: f64,
    pub saved_amount: f64,
    /// Final price formatted for display, e.g. "$1,234.50"
    pub final_price_display: String,
    /// Saved amount formatted for display
    pub saved_amount_display: String,
}

impl From<PriceResult> for DiscountResultResponse {
    fn from(result: PriceResult) -> Self {
        Self {
            final_price: result.final_price,
            saved_amount: result.saved_amount,
            final_price_display: format_amount(result.final_price, DEFAULT_CURRENCY_SYMBOL),
            saved_amount_display: format_amount(result.saved_amount, DEFAULT_CURRENCY_SYMBOL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum CalculatorStatusDto {
    #[oai(rename = "idle")]
    Idle,
    #[oai(rename = "result")]
    Result,
    #[oai(rename = "error")]
    Error,
}

/// Calculator state after an action: the fields to show and the result
/// region.
#[derive(Debug, Clone, Object)]
pub struct CalculatorViewResponse {
    pub original_price: String,
    pub discount: String,
    pub kind: DiscountKindDto,
    pub status: CalculatorStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub result: Option<DiscountResultResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<ErrorResponse>,
}

impl From<&Calculator> for CalculatorViewResponse {
    fn from(calculator: &Calculator) -> Self {
        let (status, result, error) = match calculator.display() {
            CalculatorDisplay::Idle => (CalculatorStatusDto::Idle, None, None),
            CalculatorDisplay::Result(result) => {
                (CalculatorStatusDto::Result, Some(result.into()), None)
            }
            CalculatorDisplay::ValidationError(err) => {
                let (_, json) = err.into_error_response();
                (CalculatorStatusDto::Error, None, Some(json.0))
            }
            CalculatorDisplay::ScanError(err) => {
                let (_, json) = err.into_error_response();
                (CalculatorStatusDto::Error, None, Some(json.0))
            }
        };

        Self {
            original_price: calculator.original_price().to_string(),
            discount: calculator.discount().to_string(),
            kind: calculator.kind().into(),
            status,
            result,
            error,
        }
    }
}
