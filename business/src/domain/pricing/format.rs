pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Renders an amount with two fraction digits and thousands grouping,
/// e.g. `1234.5` as `$1,234.50`.
pub fn format_amount(value: f64, currency_symbol: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Sign only when the rounded amount is non-zero.
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{currency_symbol}{grouped}.{fraction}")
}
