//! Decimal string helpers
//!
//! Splitting numeric text into its parts, digit grouping, and fixed-point
//! rendering for display. Every knob (decimal places, separator, length cap)
//! is an explicit parameter; there is no global formatting state.

/// The three components of numeric text such as `"123.456E7"`.
///
/// A component is `None` when its marker is absent; it is an empty string
/// when the marker is present but the digits are missing (`"1."`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberParts<'a> {
    pub whole: &'a str,
    pub fraction: Option<&'a str>,
    pub exponent: Option<&'a str>,
}

/// Split numeric text into whole, fraction and exponent parts.
pub fn split_number(text: &str) -> NumberParts<'_> {
    let exp = text.find(['e', 'E']);
    let dot = text.find('.');

    let whole_end = dot.or(exp).unwrap_or(text.len());
    let whole = &text[..whole_end];

    let fraction = dot.map(|d| {
        let end = exp.filter(|&e| e > d).unwrap_or(text.len());
        &text[d + 1..end]
    });

    let exponent = exp.map(|e| &text[e + 1..]);

    NumberParts {
        whole,
        fraction,
        exponent,
    }
}

/// Insert `separator` every three digits into a whole-number string.
///
/// The separator is not localized; the caller decides which character to
/// use. A leading sign is preserved.
pub fn group_digits(whole: &str, separator: char) -> String {
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };

    let mut out = String::with_capacity(whole.len() + digits.len() / 3);
    out.push_str(sign);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(separator);
        }
    }
    out
}

/// Fixed-point rendering with at most `decimal_places` fractional digits,
/// trailing zeros stripped.
pub fn format_fixed(x: f64, decimal_places: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let mut s = format!("{x:.decimal_places$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s.truncate(0);
        s.push('0');
    }
    s
}

/// Fixed-point rendering with an optional thousands separator in the whole
/// part, as used for the equivalents view.
pub fn format_grouped(x: f64, decimal_places: usize, separator: Option<char>) -> String {
    let fixed = format_fixed(x, decimal_places);
    let Some(sep) = separator else {
        return fixed;
    };
    match fixed.split_once('.') {
        Some((whole, fraction)) => format!("{}.{}", group_digits(whole, sep), fraction),
        None => group_digits(&fixed, sep),
    }
}

/// Fixed-point rendering capped at `max_len` characters.
///
/// When the fixed form does not fit, falls back to exponent notation with as
/// many mantissa digits as the cap allows.
pub fn format_display(x: f64, decimal_places: usize, max_len: usize) -> String {
    let fixed = format_fixed(x, decimal_places);
    if fixed.len() <= max_len {
        return fixed;
    }
    let mut precision = decimal_places.max(6);
    loop {
        let s = format!("{x:.precision$e}");
        if s.len() <= max_len || precision == 0 {
            return s;
        }
        precision -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        let p = split_number("123");
        assert_eq!(p.whole, "123");
        assert_eq!(p.fraction, None);
        assert_eq!(p.exponent, None);
    }

    #[test]
    fn test_split_full() {
        let p = split_number("12345.6789E12");
        assert_eq!(p.whole, "12345");
        assert_eq!(p.fraction, Some("6789"));
        assert_eq!(p.exponent, Some("12"));
    }

    #[test]
    fn test_split_empty_components() {
        let p = split_number("1.");
        assert_eq!(p.whole, "1");
        assert_eq!(p.fraction, Some(""));
        let p = split_number(".5");
        assert_eq!(p.whole, "");
        assert_eq!(p.fraction, Some("5"));
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
        assert_eq!(group_digits("-1234567", ','), "-1,234,567");
        assert_eq!(group_digits("123456", ' '), "123 456");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(212.0, 2), "212");
        assert_eq!(format_fixed(39.370_078_740_157_48, 2), "39.37");
        assert_eq!(format_fixed(0.1, 2), "0.1");
        assert_eq!(format_fixed(-0.001, 2), "0");
        assert_eq!(format_fixed(2.5, 0), "2");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1_000_000_000.0, 2, Some(',')), "1,000,000,000");
        assert_eq!(format_grouped(1234.5, 2, Some(',')), "1,234.5");
        assert_eq!(format_grouped(1234.5, 2, None), "1234.5");
    }

    #[test]
    fn test_format_display_fits() {
        assert_eq!(format_display(39.370_078_740_157_48, 2, 12), "39.37");
    }

    #[test]
    fn test_format_display_falls_back_to_exponent() {
        let s = format_display(9.460_730_472_580_8e24, 2, 12);
        assert!(s.len() <= 12, "got {s:?}");
        assert!(s.contains('e'), "got {s:?}");
    }
}
