//! Canonical string form of numeric results.

/// Format a number for display.
///
/// The layout is locale independent and uses the shortest digit string that
/// round-trips to the same `f64`. Magnitudes at or above `1e21` and below
/// `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let (digits, point) = shortest_digits(n.abs());
    format!("{}{}", sign, layout(&digits, point))
}

/// Split a positive finite number into its shortest significant digits and
/// the position of the decimal point relative to them, such that the value
/// is `0.DIGITS * 10^point`.
fn shortest_digits(n: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-tripping mantissa, e.g. "1.2345e2".
    let formatted = format!("{:e}", n);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent + 1)
}

fn layout(digits: &str, point: i32) -> String {
    let k = digits.len() as i32;

    if k <= point && point <= 21 {
        let mut out = digits.to_string();
        out.extend(std::iter::repeat_n('0', (point - k) as usize));
        return out;
    }

    if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        return format!("{}.{}", int_part, frac_part);
    }

    if -6 < point && point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let exponent = point - 1;
    let exp_sign = if exponent >= 0 { '+' } else { '-' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{}e{}{}", first, exp_sign, exponent.abs())
    } else {
        format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
    }
}
