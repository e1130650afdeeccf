// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

//! Parsing of serialized CSS pixel lengths.

/// Parses the longest numeric prefix of `value`, ignoring whatever follows it.
///
/// This matches the behaviour of JavaScript's `parseFloat`, which is what resolved styles
/// such as `"12.5px"` are conventionally read with:
///
/// - leading white space is skipped,
/// - an optional sign is followed by either `Infinity` or a decimal literal with an
///   optional exponent,
/// - trailing units or garbage are ignored,
/// - if there is no numeric prefix at all, the result is `NaN`.
///
/// `NaN` is a value here, not an error: callers let it propagate.
pub fn parse_css_float(value: &str) -> f64 {
    let trimmed = value.trim_start_matches(is_js_whitespace);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let negative = bytes.first() == Some(&b'-');

    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone `.` after the integer part is still part of the literal (`"1."`),
        // but `"."` on its own is not a number.
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // Rust's float grammar accepts everything the scan above admits (including `"1."`
    // and `".5"`), so this only fails on a bug in the scan.
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::parse_css_float;

    #[test]
    fn pixel_lengths() {
        assert_eq!(parse_css_float("0px"), 0.0);
        assert_eq!(parse_css_float("10px"), 10.0);
        assert_eq!(parse_css_float("12.5px"), 12.5);
        assert_eq!(parse_css_float("-3px"), -3.0);
        assert_eq!(parse_css_float("+4px"), 4.0);
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(parse_css_float("  7px"), 7.0);
        assert_eq!(parse_css_float("\n\t1.5"), 1.5);
        assert_eq!(parse_css_float("\u{FEFF}2"), 2.0);
    }

    #[test]
    fn partial_literals() {
        assert_eq!(parse_css_float(".5px"), 0.5);
        assert_eq!(parse_css_float("1.px"), 1.0);
        assert_eq!(parse_css_float("1.2.3"), 1.2);
        assert_eq!(parse_css_float("-.25"), -0.25);
    }

    #[test]
    fn exponents() {
        assert_eq!(parse_css_float("  -2.5e1em"), -25.0);
        assert_eq!(parse_css_float("1E+2"), 100.0);
        assert_eq!(parse_css_float("5e-1px"), 0.5);
        // An exponent marker without digits is not part of the number.
        assert_eq!(parse_css_float("1e"), 1.0);
        assert_eq!(parse_css_float("1e+px"), 1.0);
        // Neither is `em` after a number, even though it starts with `e`.
        assert_eq!(parse_css_float("3em"), 3.0);
    }

    #[test]
    fn infinities() {
        assert_eq!(parse_css_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_css_float("-Infinitypx"), f64::NEG_INFINITY);
        assert!(parse_css_float("infinity").is_nan());
        assert!(parse_css_float("inf").is_nan());
    }

    #[test]
    fn non_numeric_is_nan() {
        for value in ["", " ", "auto", "px", ".", "-", "+.", "e5", "NaN", "calc(1px)"] {
            assert!(parse_css_float(value).is_nan(), "{value:?} should parse to NaN");
        }
    }
}
