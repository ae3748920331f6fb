/// Validation failures of the pricing engine.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("pricing.invalid_price")]
    InvalidPrice,
    #[error("pricing.percentage_out_of_range")]
    PercentageOutOfRange,
    #[error("pricing.negative_discount")]
    NegativeDiscount,
    #[error("pricing.discount_exceeds_price")]
    DiscountExceedsPrice,
}

impl ValidationError {
    /// Human readable text shown in the result region.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidPrice => "Please enter a valid original price.",
            ValidationError::PercentageOutOfRange => "Discount must be between 0 and 100.",
            ValidationError::NegativeDiscount => "Please enter a valid discount amount.",
            ValidationError::DiscountExceedsPrice => {
                "Discount cannot be greater than the original price."
            }
        }
    }
}
