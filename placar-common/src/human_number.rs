//! Human-readable number formatting
//!
//! Point totals cross the API boundary pre-formatted in the pt-BR
//! convention: `.` for thousands grouping, `,` as the decimal separator.
//! The core data model stays numeric; this module is presentation-boundary
//! only.

/// Fractional digits retained in formatted output.
const FRACTION_DIGITS: u32 = 2;

/// Format a point total in pt-BR convention.
///
/// Thousands are grouped with `.`, the decimal separator is `,`, and up
/// to two fractional digits are kept with trailing zeros trimmed.
///
/// # Examples
///
/// ```
/// use placar_common::human_number::format_points;
///
/// assert_eq!(format_points(80.0), "80");
/// assert_eq!(format_points(12.5), "12,5");
/// assert_eq!(format_points(1234.5), "1.234,5");
/// assert_eq!(format_points(1234567.0), "1.234.567");
/// assert_eq!(format_points(-1050.25), "-1.050,25");
/// ```
pub fn format_points(value: f64) -> String {
    let scale = 10u64.pow(FRACTION_DIGITS) as f64;
    let scaled = (value.abs() * scale).round() as u64;
    let integer = scaled / scale as u64;
    let fraction = scaled % scale as u64;

    let mut out = String::new();
    if value < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if fraction > 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(",{}", fraction / 10));
        } else {
            out.push_str(&format!(",{:02}", fraction));
        }
    }
    out
}

/// Group an integer's digits with `.` every three, right to left.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_decimal_part() {
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(7.0), "7");
        assert_eq!(format_points(45.0), "45");
    }

    #[test]
    fn thousands_group_with_periods() {
        assert_eq!(format_points(1000.0), "1.000");
        assert_eq!(format_points(999.0), "999");
        assert_eq!(format_points(12345678.0), "12.345.678");
    }

    #[test]
    fn decimals_use_comma_and_trim_zeros() {
        assert_eq!(format_points(12.5), "12,5");
        assert_eq!(format_points(12.25), "12,25");
        assert_eq!(format_points(12.05), "12,05");
        assert_eq!(format_points(12.004), "12"); // rounds away below two digits
    }

    #[test]
    fn negative_values_keep_the_sign() {
        assert_eq!(format_points(-12.5), "-12,5");
        assert_eq!(format_points(-0.001), "0"); // rounds to zero, no sign
    }
}
