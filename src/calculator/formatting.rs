//! Result formatting.

/// Digits after the decimal point for results typed on the keypad.
pub const KEYPAD_PRECISION: usize = 6;

/// Digits after the decimal point for results read from handwriting.
pub const RECOGNITION_PRECISION: usize = 4;

/// Largest magnitude rendered through the integer path.
const INTEGER_LIMIT: f64 = 1e15;

/// Render `value` as the shortest decimal string.
///
/// Whole numbers come out without a decimal point. Everything else is written
/// with `precision` fractional digits, then trailing zeros and a dangling `.`
/// are stripped.
pub fn format_result(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_LIMIT {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.*}", precision, value);
        if !formatted.contains('.') {
            return formatted;
        }
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" => "0".to_string(),
            other => other.to_string(),
        }
    }
}
