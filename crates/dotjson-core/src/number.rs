//! Number grammar checks and the 17-significant-digit text format.
//!
//! Serialized numbers use the shortest fixed form when the decimal exponent
//! falls in `[-4, 17)` and scientific notation with a signed, two-digit
//! minimum exponent otherwise, with trailing fractional zeros trimmed in
//! both forms. 17 significant digits are enough to round-trip any `f64`.

/// Parse the scanned number span, or `None` if it is not a well-formed
/// finite JSON number.
pub(crate) fn parse_f64(text: &str) -> Option<f64> {
    if text.is_empty() || !is_decimal(text) {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

/// JSON number form check applied before `f64` parsing: leading zeros
/// (`01`, `-01`) are rejected unless followed by a decimal point, and hex
/// markers are rejected outright.
fn is_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1] != b'.' {
        return false;
    }
    if bytes.len() > 2 && bytes.starts_with(b"-0") && bytes[2] != b'.' {
        return false;
    }
    !bytes.iter().any(|&b| b == b'x' || b == b'X')
}

/// Format a finite `f64` with 17 significant digits.
pub(crate) fn format_f64(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // One mantissa digit before the point plus 16 after gives the 17
    // significant digits; the exponent decides the final form.
    let sci = format!("{value:.16e}");
    let Some((mantissa, exp_text)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp_text.parse().unwrap_or(0);

    if (-4..17).contains(&exp) {
        let precision = (16 - exp) as usize;
        let mut fixed = format!("{value:.precision$}");
        trim_fraction(&mut fixed);
        fixed
    } else {
        let mut digits = mantissa.to_owned();
        trim_fraction(&mut digits);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{digits}e{sign}{:02}", exp.abs())
    }
}

fn trim_fraction(text: &mut String) {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
}
