use super::errors::ExtractionError;
use super::model::ScannedPrice;

/// Reduces a free-text service response to a price.
///
/// Everything but digits and `.` is dropped, then the longest leading decimal
/// literal is read, so `"$1,299.00"` gives `1299` and `"19.99.5"` gives
/// `19.99`. Anything that is not a finite positive number is rejected with the
/// response text attached.
pub fn parse_price(response_text: &str) -> Result<ScannedPrice, ExtractionError> {
    let raw_text = response_text.trim().to_string();

    let stripped: String = raw_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match leading_decimal(&stripped).and_then(|literal| literal.parse::<f64>().ok()) {
        Some(price) if price.is_finite() && price > 0.0 => Ok(ScannedPrice { price, raw_text }),
        _ => Err(ExtractionError::UnparseableResponse { raw: raw_text }),
    }
}

fn leading_decimal(digits: &str) -> Option<&str> {
    let end = match digits.find('.') {
        Some(dot) => digits[dot + 1..]
            .find('.')
            .map_or(digits.len(), |next| dot + 1 + next),
        None => digits.len(),
    };
    let literal = &digits[..end];

    if literal.chars().any(|c| c.is_ascii_digit()) {
        Some(literal)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_currency_and_words() {
        let scanned = parse_price("$19.99 only").unwrap();

        assert_eq!(scanned.price, 19.99);
        assert_eq!(scanned.raw_text, "$19.99 only");
    }

    #[test]
    fn should_parse_plain_number() {
        assert_eq!(parse_price("42").unwrap().price, 42.0);
        assert_eq!(parse_price(" 7.5\n").unwrap().price, 7.5);
    }

    #[test]
    fn should_drop_thousands_separators() {
        assert_eq!(parse_price("1,299.00").unwrap().price, 1299.0);
    }

    #[test]
    fn should_stop_at_second_decimal_point() {
        assert_eq!(parse_price("19.99.5").unwrap().price, 19.99);
    }

    #[test]
    fn should_accept_leading_decimal_point() {
        assert_eq!(parse_price(".99").unwrap().price, 0.99);
    }

    #[test]
    fn should_reject_response_without_digits() {
        let err = parse_price("no price found").unwrap_err();

        assert_eq!(
            err,
            ExtractionError::UnparseableResponse {
                raw: "no price found".to_string()
            }
        );
    }

    #[test]
    fn should_reject_zero() {
        assert!(matches!(
            parse_price("0.00"),
            Err(ExtractionError::UnparseableResponse { .. })
        ));
    }

    #[test]
    fn should_reject_lone_decimal_point() {
        assert!(parse_price("Price: .").is_err());
    }

    #[test]
    fn should_report_trimmed_response_text() {
        let err = parse_price("  nothing here  ").unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UnparseableResponse {
                raw: "nothing here".to_string()
            }
        );
    }
}
