//! Number formatting for product cards

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```rust,ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Group digits by three from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a money value with 2 decimals and a thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Price as shown on a product card, e.g. "$1,234.50"
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_money(-value))
    } else {
        format!("${}", format_money(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(999.0), "999.00");
    }

    #[test]
    fn test_format_without_decimals() {
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(-100.0, 0), "-100");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(1500.0), "$1,500.00");
        assert_eq!(format_price(-2.5), "-$2.50");
    }
}
