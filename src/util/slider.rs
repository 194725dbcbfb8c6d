//! Range-slider value echo formatting.
//!
//! Each `<input type="range" id="X">` echoes its value into the element with
//! id `X-value`, always rendered with two decimals.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Id of the element that echoes the slider with id `slider_id`.
pub fn output_id(slider_id: &str) -> String {
    format!("{slider_id}-value")
}

/// Parse the longest numeric prefix of `raw`, ignoring leading whitespace.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let numeric_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..numeric_len];
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Render a slider value with two decimals; `None` leaves the echo untouched.
pub fn format_value(raw: &str) -> Option<String> {
    let value = parse_leading_float(raw)?;
    // -0.0 + 0.0 is +0.0, so negative zero echoes as "0.00".
    let value = value + 0.0;
    Some(to_fixed_2(value))
}

/// Two-decimal rendering that rounds exact halves away from zero.
///
/// `format!` rounds ties to even. The only doubles sitting exactly on a
/// half at the third decimal are odd multiples of 1/8 (`0.125`, `0.375`,
/// ...), and `value * 8.0` is exact, so those are detected and bumped.
fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie {
        return format!("{value:.2}");
    }
    let cents = (value.abs() * 100.0).ceil();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{:.2}", cents / 100.0)
}
