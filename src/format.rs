//! Display formatting for revenue figures.

/// Thousands separator used by [`format_number`].
pub const DEFAULT_SEPARATOR: char = ',';

/// Render `value` with two decimals and `,` between groups of three digits.
///
/// ```
/// use revenue_ledger::format::format_number;
/// assert_eq!(format_number(1234567.891), "1,234,567.89");
/// assert_eq!(format_number(25.0), "25.00");
/// ```
pub fn format_number(value: f64) -> String {
    format_number_with_separator(value, DEFAULT_SEPARATOR)
}

/// Same as [`format_number`] with a custom group separator.
///
/// NaN and infinities are rendered as `NaN`, `inf` and `-inf`.
pub fn format_number_with_separator(value: f64, separator: char) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Ties on the cent go away from zero: 0.125 shows as 0.13.
    let scaled = (value * 100.0).round() / 100.0;
    let cents = if scaled.is_finite() { scaled } else { value };
    let fixed = format!("{:.2}", cents);
    let (integer_part, decimal_part) = match fixed.split_once('.') {
        Some((i, d)) => (i, d),
        None => (fixed.as_str(), "00"),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// [`format_number`] prefixed with a dollar sign.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_number(value))
}
