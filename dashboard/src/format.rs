//! Currency formatting for KPI value text.
//!
//! The server renders raw numeric text (`"10000"`); the enrichment layer
//! rewrites it as a localized currency string (`"$10,000.00"`). Parsing is
//! deliberately loose - a leading numeric prefix is enough, trailing junk is
//! ignored - and a text with no numeric prefix is left alone rather than
//! treated as an error.

/// Default currency symbol applied on mount.
pub const DEFAULT_SYMBOL: &str = "$";

/// Default number of fractional digits applied on mount.
pub const DEFAULT_DECIMALS: usize = 2;

/// Parse the leading numeric prefix of `text`, `parseFloat`-style.
///
/// Skips leading whitespace, accepts an optional sign, digits, and a single
/// decimal point, and stops at the first character that can't extend the
/// number. Returns `None` when no digit was consumed.
///
/// ```rust
/// use dashboard_leptos::format::parse_leading_number;
///
/// assert_eq!(parse_leading_number("10000"), Some(10000.0));
/// assert_eq!(parse_leading_number("+5% vs last month"), Some(5.0));
/// assert_eq!(parse_leading_number("  -2.5%"), Some(-2.5));
/// assert_eq!(parse_leading_number("N/A"), None);
/// assert_eq!(parse_leading_number("$10,000.00"), None);
/// ```
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // "5." and ".5" are both valid prefixes; a bare "." is not.
        if frac_end > end + 1 || digits > 0 {
            digits += frac_end - end - 1;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Format `raw` as a currency string, or `None` when it has no numeric prefix.
///
/// On success the result is `symbol` + the value with exactly `decimals`
/// fractional digits and thousands separators every 3 digits in the integer
/// part. A negative sign sits between the symbol and the digits.
///
/// Re-applying the formatter to its own output is a no-op by construction:
/// the output starts with the symbol, which is not a valid numeric-prefix
/// start, so the re-parse fails and the text is left unchanged.
///
/// ```rust
/// use dashboard_leptos::format::format_currency;
///
/// assert_eq!(format_currency("10000", "$", 2).as_deref(), Some("$10,000.00"));
/// assert_eq!(format_currency("N/A", "$", 2), None);
/// ```
pub fn format_currency(raw: &str, symbol: &str, decimals: usize) -> Option<String> {
    let value = parse_leading_number(raw)?;
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(symbol.len() + fixed.len() + int_part.len() / 3);
    out.push_str(symbol);
    out.push_str(sign);
    push_grouped(&mut out, int_part);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    Some(out)
}

/// Append `digits` to `out` with a comma every 3 digits from the right.
fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_plain_integers() {
        assert_eq!(format_currency("10000", "$", 2).as_deref(), Some("$10,000.00"));
        assert_eq!(format_currency("8000", "$", 2).as_deref(), Some("$8,000.00"));
        assert_eq!(format_currency("0", "$", 2).as_deref(), Some("$0.00"));
    }

    #[test]
    fn groups_large_integer_parts() {
        assert_eq!(
            format_currency("1234567.891", "$", 2).as_deref(),
            Some("$1,234,567.89")
        );
        assert_eq!(format_currency("999", "$", 2).as_deref(), Some("$999.00"));
        assert_eq!(format_currency("1000", "$", 2).as_deref(), Some("$1,000.00"));
    }

    #[test]
    fn negative_sign_sits_after_the_symbol() {
        assert_eq!(format_currency("-8000", "$", 2).as_deref(), Some("$-8,000.00"));
    }

    #[test]
    fn honors_symbol_and_decimals() {
        assert_eq!(format_currency("1500", "€", 0).as_deref(), Some("€1,500"));
        assert_eq!(format_currency("2.5", "$", 3).as_deref(), Some("$2.500"));
    }

    #[test]
    fn trailing_junk_is_ignored() {
        assert_eq!(format_currency("1200 USD", "$", 2).as_deref(), Some("$1,200.00"));
    }

    #[test]
    fn unparsable_text_is_left_unchanged() {
        assert_eq!(format_currency("N/A", "$", 2), None);
        assert_eq!(format_currency("", "$", 2), None);
        assert_eq!(format_currency("pending", "$", 2), None);
    }

    // Double-apply must degrade to a no-op: the symbol-prefixed output is
    // not a valid numeric prefix, so the re-parse fails.
    #[test]
    fn double_apply_is_a_no_op() {
        let once = format_currency("10000", "$", 2).unwrap();
        assert_eq!(once, "$10,000.00");
        assert_eq!(format_currency(&once, "$", 2), None);
    }

    #[test]
    fn parses_fractional_prefixes() {
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-"), None);
    }

    #[test]
    fn comma_stops_the_parse() {
        // "10,000" parses as 10 - one more reason formatted text must not
        // be re-fed to the formatter without the symbol guard.
        assert_eq!(parse_leading_number("10,000"), Some(10.0));
    }
}
