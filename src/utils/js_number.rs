//! JavaScript number conversions
//!
//! Attribute values written by the page's own scripts go through
//! `parseFloat` and `Number#toString`. These helpers reproduce both so that
//! attributes rewritten from Rust read exactly like ones written from JS.

/// Trim the way `String.prototype.trim` does (Unicode whitespace plus BOM).
pub fn trim_js(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// ECMAScript WhiteSpace and LineTerminator. Unicode White_Space also
/// covers U+0085, which JS does not treat as whitespace.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `parseFloat` semantics: the longest numeric prefix after leading
/// whitespace, or NaN when there is none. Never fails.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// `Number#toString` for any f64, including NaN, the infinities and `-0`.
pub fn number_to_string(value: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    js_number_str(value, &mut buf).to_string()
}

/// Same as [`number_to_string`] but reuses a caller-owned buffer.
pub fn js_number_str(value: f64, buf: &mut ryu_js::Buffer) -> &str {
    if value.is_nan() {
        return "NaN";
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" };
    }
    let value = if value == 0.0 { 0.0 } else { value };
    buf.format_finite(value)
}
