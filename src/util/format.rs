use crate::core::constants::THOUSANDS_SEPARATOR;

/// Left-pads the decimal form of `n` with `'0'` up to `width` characters.
///
/// A leading minus sign counts toward the width like any other character
/// and is not moved in front of the padding. Longer values are never
/// truncated.
pub fn zero_pad(n: i64, width: usize) -> String {
    format!("{:0>width$}", n, width = width)
}

/// Inserts [`THOUSANDS_SEPARATOR`] every three digits from the right.
pub fn group_thousands(magnitude: u64) -> String {
    group_digits(&magnitude.to_string())
}

fn group_digits(digits: &str) -> String {
    let lead = match digits.len() % 3 {
        0 => 3,
        r => r,
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx >= lead && (idx - lead) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Plain magnitude of a projected coordinate: rounded to a whole number,
/// sign dropped, digits grouped.
pub fn human_string_value(value: f64) -> String {
    if !value.is_finite() {
        log::warn!("Non-finite coordinate {} shown as 0", value);
        return group_thousands(0);
    }
    let magnitude = value.round().abs();
    if magnitude >= u64::MAX as f64 {
        log::warn!("Coordinate {} is past the integer range, digits are approximate", value);
        return group_digits(&format!("{:.0}", magnitude));
    }
    group_thousands(magnitude as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(5, 2), "05");
        assert_eq!(zero_pad(0, 2), "00");
        assert_eq!(zero_pad(123, 2), "123");
        assert_eq!(zero_pad(7, 0), "7");
    }

    #[test]
    fn test_zero_pad_negative_counts_sign() {
        assert_eq!(zero_pad(-5, 3), "0-5");
        assert_eq!(zero_pad(-5, 2), "-5");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1234567), "1'234'567");
        assert_eq!(group_thousands(42), "42");
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1'000");
        assert_eq!(group_thousands(123456), "123'456");
    }

    #[test]
    fn test_human_string_value() {
        assert_eq!(human_string_value(457996.4), "457'996");
        assert_eq!(human_string_value(-339874.5), "339'875");
        assert_eq!(human_string_value(12.0), "12");
        assert_eq!(human_string_value(f64::NAN), "0");
    }

    #[test]
    fn test_human_string_value_past_u64() {
        assert_eq!(
            human_string_value(-1.0e20),
            "100'000'000'000'000'000'000"
        );
        // u64::MAX rounds up to 2^64 as a float
        assert_eq!(human_string_value(u64::MAX as f64), "18'446'744'073'709'551'616");
    }
}
