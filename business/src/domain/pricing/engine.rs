use super::errors::ValidationError;
use super::model::{DiscountKind, PriceInput, PriceResult};

/// Computes the discounted price from raw field text.
///
/// Returns `Ok(None)` while either field is empty or not a number yet, so a
/// half-typed form shows nothing instead of an error. Validation only starts
/// once both fields hold a number.
pub fn compute(
    original_price: &str,
    discount: &str,
    kind: DiscountKind,
) -> Result<Option<PriceResult>, ValidationError> {
    let (Some(original_price), Some(discount_value)) =
        (parse_field(original_price), parse_field(discount))
    else {
        return Ok(None);
    };

    evaluate(PriceInput {
        original_price,
        discount_value,
        discount_kind: kind,
    })
    .map(Some)
}

/// Validates parsed inputs and applies the discount.
pub fn evaluate(input: PriceInput) -> Result<PriceResult, ValidationError> {
    let price = input.original_price;
    let discount = input.discount_value;

    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    let saved_amount = match input.discount_kind {
        DiscountKind::Percentage => {
            if !(0.0..=100.0).contains(&discount) {
                return Err(ValidationError::PercentageOutOfRange);
            }
            price * (discount / 100.0)
        }
        DiscountKind::Fixed => {
            if discount.is_nan() || discount < 0.0 {
                return Err(ValidationError::NegativeDiscount);
            }
            if discount > price {
                return Err(ValidationError::DiscountExceedsPrice);
            }
            discount
        }
    };

    Ok(PriceResult {
        final_price: positive_zero(price - saved_amount),
        saved_amount: positive_zero(saved_amount),
    })
}

/// Parses a form field. Blank or non-numeric text counts as "not entered".
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// "-0" is a valid price and would otherwise render as "-0.00".
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn should_apply_percentage_discount() {
        let result = compute("100", "25", DiscountKind::Percentage)
            .unwrap()
            .unwrap();

        assert_eq!(result.final_price, 75.0);
        assert_eq!(result.saved_amount, 25.0);
    }

    #[test]
    fn should_apply_fixed_discount() {
        let result = compute("80", "15.5", DiscountKind::Fixed).unwrap().unwrap();

        assert_eq!(result.final_price, 64.5);
        assert_eq!(result.saved_amount, 15.5);
    }

    #[test]
    fn should_reject_percentage_above_hundred() {
        let result = compute("50", "160", DiscountKind::Percentage);
        assert_eq!(result, Err(ValidationError::PercentageOutOfRange));

        let result = compute("50", "100.01", DiscountKind::Percentage);
        assert_eq!(result, Err(ValidationError::PercentageOutOfRange));
    }

    #[test]
    fn should_accept_percentage_within_range_even_when_larger_than_price() {
        let result = compute("50", "60", DiscountKind::Percentage);
        assert_eq!(
            result,
            Ok(Some(PriceResult {
                final_price: 20.0,
                saved_amount: 30.0
            }))
        );
    }

    #[test]
    fn should_reject_negative_percentage() {
        let result = compute("50", "-1", DiscountKind::Percentage);
        assert_eq!(result, Err(ValidationError::PercentageOutOfRange));
    }

    #[test]
    fn should_reject_fixed_discount_greater_than_price() {
        let result = compute("80", "100", DiscountKind::Fixed);
        assert_eq!(result, Err(ValidationError::DiscountExceedsPrice));
    }

    #[test]
    fn should_reject_negative_fixed_discount() {
        let result = compute("80", "-5", DiscountKind::Fixed);
        assert_eq!(result, Err(ValidationError::NegativeDiscount));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = compute("-10", "5", DiscountKind::Fixed);
        assert_eq!(result, Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert_eq!(
            compute("inf", "5", DiscountKind::Percentage),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            compute("NaN", "5", DiscountKind::Fixed),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn should_reject_non_finite_discount() {
        assert_eq!(
            compute("10", "NaN", DiscountKind::Percentage),
            Err(ValidationError::PercentageOutOfRange)
        );
        assert_eq!(
            compute("10", "NaN", DiscountKind::Fixed),
            Err(ValidationError::NegativeDiscount)
        );
        assert_eq!(
            compute("10", "inf", DiscountKind::Fixed),
            Err(ValidationError::DiscountExceedsPrice)
        );
    }

    #[test]
    fn should_be_idle_when_a_field_is_empty() {
        assert_eq!(compute("", "25", DiscountKind::Percentage), Ok(None));
        assert_eq!(compute("100", "", DiscountKind::Percentage), Ok(None));
        assert_eq!(compute("   ", "  ", DiscountKind::Fixed), Ok(None));
    }

    #[test]
    fn should_be_idle_when_a_field_is_not_a_number() {
        assert_eq!(compute("abc", "25", DiscountKind::Percentage), Ok(None));
        assert_eq!(compute("100", "-", DiscountKind::Fixed), Ok(None));
    }

    #[test]
    fn should_trim_whitespace_around_numbers() {
        let result = compute(" 100 ", "\t10\n", DiscountKind::Fixed)
            .unwrap()
            .unwrap();
        assert_eq!(result.final_price, 90.0);
    }

    #[test]
    fn should_return_full_price_when_discount_is_zero() {
        for kind in [DiscountKind::Percentage, DiscountKind::Fixed] {
            let result = compute("42.5", "0", kind).unwrap().unwrap();
            assert_eq!(result.final_price, 42.5);
            assert_eq!(result.saved_amount, 0.0);
        }
    }

    #[test]
    fn should_return_zero_when_percentage_is_hundred() {
        let result = compute("19.99", "100", DiscountKind::Percentage)
            .unwrap()
            .unwrap();
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.saved_amount, 19.99);
    }

    #[test]
    fn should_allow_fixed_discount_equal_to_price() {
        let result = compute("80", "80", DiscountKind::Fixed).unwrap().unwrap();
        assert_eq!(result.final_price, 0.0);
    }

    #[test]
    fn should_not_produce_negative_zero_for_negative_zero_price() {
        let result = compute("-0", "0", DiscountKind::Fixed).unwrap().unwrap();
        assert!(result.final_price.is_sign_positive());
    }

    proptest! {
        #[test]
        fn percentage_discount_matches_closed_form(
            price in 0.0f64..1_000_000.0,
            discount in 0.0f64..=100.0,
        ) {
            let result = evaluate(PriceInput {
                original_price: price,
                discount_value: discount,
                discount_kind: DiscountKind::Percentage,
            })
            .unwrap();

            prop_assert!(approx_eq(result.final_price, price * (1.0 - discount / 100.0)));
            prop_assert!(approx_eq(result.saved_amount, price - result.final_price));
            prop_assert!(result.final_price >= 0.0);
            prop_assert!(result.final_price <= price);
        }

        #[test]
        fn fixed_discount_subtracts_exactly(
            price in 0.0f64..1_000_000.0,
            ratio in 0.0f64..=1.0,
        ) {
            let discount = price * ratio;
            let result = evaluate(PriceInput {
                original_price: price,
                discount_value: discount,
                discount_kind: DiscountKind::Fixed,
            })
            .unwrap();

            prop_assert_eq!(result.final_price, price - discount);
            prop_assert_eq!(result.saved_amount, discount);
            prop_assert!(result.final_price >= 0.0);
        }

        #[test]
        fn recomputing_is_idempotent(
            price in 0.0f64..10_000.0,
            discount in 0.0f64..200.0,
            fixed in any::<bool>(),
        ) {
            let kind = if fixed { DiscountKind::Fixed } else { DiscountKind::Percentage };
            let price = price.to_string();
            let discount = discount.to_string();

            prop_assert_eq!(compute(&price, &discount, kind), compute(&price, &discount, kind));
        }
    }
}
