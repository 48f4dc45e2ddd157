//! Number formatting for cards

/// Group digits in threes: `1234567` becomes `1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rupee amount with thousands separators; fractions keep two decimals.
/// Non-finite amounts are shown as they are.
pub fn format_rupees(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    // Rounding in the decimal text avoids casting out of i64 range
    let text = format!("{:.2}", amount.abs());
    let (whole, decimals) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if amount < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    if decimals == "00" {
        format!("₹{}{}", sign, group_digits(whole))
    } else {
        format!("₹{}{}.{}", sign, group_digits(whole), decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(25_000_000), "25,000,000");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(5_000_000.0), "₹5,000,000");
        assert_eq!(format_rupees(1234.5), "₹1,234.50");
        assert_eq!(format_rupees(999.999), "₹1,000");
        assert_eq!(format_rupees(-0.5), "₹-0.50");
        assert_eq!(format_rupees(-1500.0), "₹-1,500");
    }

    #[test]
    fn test_format_rupees_out_of_integer_range() {
        assert_eq!(format_rupees(1e19), "₹10,000,000,000,000,000,000");
        assert_eq!(format_rupees(f64::INFINITY), "inf");
        assert_eq!(format_rupees(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_rupees(f64::NAN), "NaN");
    }
}
