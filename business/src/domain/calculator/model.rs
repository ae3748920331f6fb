use crate::domain::capture::errors::CaptureError;
use crate::domain::capture::model::ScannedPrice;
use crate::domain::pricing::engine;
use crate::domain::pricing::errors::ValidationError;
use crate::domain::pricing::model::{DiscountKind, PriceResult};

/// What the result region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorDisplay {
    Idle,
    Result(PriceResult),
    ValidationError(ValidationError),
    ScanError(CaptureError),
}

impl CalculatorDisplay {
    /// Plain text for the error region, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            CalculatorDisplay::ValidationError(err) => Some(err.user_message().to_string()),
            CalculatorDisplay::ScanError(err) => Some(err.user_message()),
            CalculatorDisplay::Idle | CalculatorDisplay::Result(_) => None,
        }
    }
}

/// State behind the calculator form.
///
/// The displayed result is derived from the fields on every read. Only scan
/// failures are stored, and they last until the next scan or a field edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    original_price: String,
    discount: String,
    kind: DiscountKind,
    scan_error: Option<CaptureError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the form from values held by a client.
    pub fn from_fields(
        original_price: impl Into<String>,
        discount: impl Into<String>,
        kind: DiscountKind,
    ) -> Self {
        Self {
            original_price: original_price.into(),
            discount: discount.into(),
            kind,
            scan_error: None,
        }
    }

    pub fn original_price(&self) -> &str {
        &self.original_price
    }

    pub fn discount(&self) -> &str {
        &self.discount
    }

    pub fn kind(&self) -> DiscountKind {
        self.kind
    }

    pub fn scan_error(&self) -> Option<&CaptureError> {
        self.scan_error.as_ref()
    }

    pub fn set_original_price(&mut self, value: impl Into<String>) {
        self.original_price = value.into();
        self.scan_error = None;
    }

    pub fn set_discount(&mut self, value: impl Into<String>) {
        self.discount = value.into();
        self.scan_error = None;
    }

    /// Switching kind empties the discount so an out-of-range value never
    /// carries over. Re-selecting the current kind changes nothing.
    pub fn set_kind(&mut self, kind: DiscountKind) {
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.discount.clear();
        self.scan_error = None;
    }

    /// Called when a scan starts; clears the previous scan error.
    pub fn begin_scan(&mut self) {
        self.scan_error = None;
    }

    /// Applies the outcome of a scan. A price replaces the original price
    /// field; a failure is kept for display.
    pub fn finish_scan(&mut self, outcome: Result<ScannedPrice, CaptureError>) {
        match outcome {
            Ok(scanned) => {
                self.original_price = scanned.price.to_string();
                self.scan_error = None;
            }
            Err(err) => self.scan_error = Some(err),
        }
    }

    /// Recomputes the result region from the current fields.
    pub fn display(&self) -> CalculatorDisplay {
        if let Some(err) = &self.scan_error {
            return CalculatorDisplay::ScanError(err.clone());
        }

        match engine::compute(&self.original_price, &self.discount, self.kind) {
            Ok(Some(result)) => CalculatorDisplay::Result(result),
            Ok(None) => CalculatorDisplay::Idle,
            Err(err) => CalculatorDisplay::ValidationError(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::errors::{CameraError, ExtractionError};

    fn scanned(price: f64, raw: &str) -> ScannedPrice {
        ScannedPrice {
            price,
            raw_text: raw.to_string(),
        }
    }

    #[test]
    fn should_start_idle_in_percentage_mode() {
        let calculator = Calculator::new();

        assert_eq!(calculator.kind(), DiscountKind::Percentage);
        assert_eq!(calculator.display(), CalculatorDisplay::Idle);
    }

    #[test]
    fn should_show_result_when_both_fields_are_filled() {
        let mut calculator = Calculator::new();
        calculator.set_original_price("100");
        calculator.set_discount("25");

        assert_eq!(
            calculator.display(),
            CalculatorDisplay::Result(PriceResult {
                final_price: 75.0,
                saved_amount: 25.0
            })
        );
    }

    #[test]
    fn should_clear_validation_error_once_input_is_fixed() {
        let mut calculator = Calculator::from_fields("80", "100", DiscountKind::Fixed);
        assert_eq!(
            calculator.display(),
            CalculatorDisplay::ValidationError(ValidationError::DiscountExceedsPrice)
        );

        calculator.set_discount("10");

        assert!(matches!(calculator.display(), CalculatorDisplay::Result(_)));
    }

    #[test]
    fn should_reset_discount_and_display_when_kind_changes() {
        let mut calculator = Calculator::from_fields("100", "60", DiscountKind::Fixed);
        assert!(matches!(calculator.display(), CalculatorDisplay::Result(_)));

        calculator.set_kind(DiscountKind::Percentage);

        assert_eq!(calculator.discount(), "");
        assert_eq!(calculator.display(), CalculatorDisplay::Idle);
    }

    #[test]
    fn should_clear_error_when_kind_changes() {
        let mut calculator = Calculator::from_fields("50", "500", DiscountKind::Percentage);
        assert!(calculator.display().message().is_some());

        calculator.set_kind(DiscountKind::Fixed);

        assert_eq!(calculator.display(), CalculatorDisplay::Idle);
        assert_eq!(calculator.display().message(), None);
    }

    #[test]
    fn should_keep_discount_when_same_kind_is_selected() {
        let mut calculator = Calculator::from_fields("100", "25", DiscountKind::Percentage);

        calculator.set_kind(DiscountKind::Percentage);

        assert_eq!(calculator.discount(), "25");
    }

    #[test]
    fn should_inject_scanned_price_into_original_price() {
        let mut calculator = Calculator::from_fields("5", "", DiscountKind::Percentage);

        calculator.begin_scan();
        calculator.finish_scan(Ok(scanned(19.99, "$19.99 only")));

        assert_eq!(calculator.original_price(), "19.99");
        assert_eq!(calculator.display(), CalculatorDisplay::Idle);
    }

    #[test]
    fn should_render_whole_scanned_price_without_fraction() {
        let mut calculator = Calculator::new();

        calculator.finish_scan(Ok(scanned(20.0, "20")));

        assert_eq!(calculator.original_price(), "20");
    }

    #[test]
    fn should_replace_prior_result_with_scanned_price() {
        let mut calculator = Calculator::from_fields("100", "25", DiscountKind::Percentage);

        calculator.finish_scan(Ok(scanned(19.99, "$19.99 only")));

        match calculator.display() {
            CalculatorDisplay::Result(result) => {
                assert_eq!(result.saved_amount, 19.99 * 0.25);
            }
            other => panic!("unexpected display: {other:?}"),
        }
    }

    #[test]
    fn should_keep_scan_error_until_next_scan() {
        let mut calculator = Calculator::from_fields("100", "25", DiscountKind::Percentage);
        let err = CaptureError::Extraction(ExtractionError::UnparseableResponse {
            raw: "no price found".to_string(),
        });

        calculator.finish_scan(Err(err.clone()));

        assert_eq!(calculator.display(), CalculatorDisplay::ScanError(err));
        assert_eq!(
            calculator.display().message().as_deref(),
            Some(
                "Could not automatically detect a valid price from \"no price found\". Please enter it manually."
            )
        );

        calculator.begin_scan();
        assert!(matches!(calculator.display(), CalculatorDisplay::Result(_)));
    }

    #[test]
    fn should_clear_scan_error_on_manual_edit() {
        let mut calculator = Calculator::new();
        calculator.finish_scan(Err(CameraError::PermissionDenied.into()));
        assert!(calculator.scan_error().is_some());

        calculator.set_original_price("10");

        assert_eq!(calculator.scan_error(), None);
    }
}
