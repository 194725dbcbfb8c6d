use super::*;

// =============================================================
// output_id
// =============================================================

#[test]
fn output_id_appends_value_suffix() {
    assert_eq!(output_id("confidence"), "confidence-value");
}

// =============================================================
// parse_leading_float
// =============================================================

#[test]
fn parse_plain_numbers() {
    assert_eq!(parse_leading_float("0.5"), Some(0.5));
    assert_eq!(parse_leading_float("-3"), Some(-3.0));
    assert_eq!(parse_leading_float(" 12"), Some(12.0));
}

#[test]
fn parse_takes_numeric_prefix() {
    assert_eq!(parse_leading_float("1.5abc"), Some(1.5));
    assert_eq!(parse_leading_float("2e"), Some(2.0));
    assert_eq!(parse_leading_float("1e2x"), Some(100.0));
}

#[test]
fn parse_rejects_non_numeric() {
    assert_eq!(parse_leading_float(""), None);
    assert_eq!(parse_leading_float("abc"), None);
    assert_eq!(parse_leading_float("-"), None);
    assert_eq!(parse_leading_float("NaN"), None);
}

// =============================================================
// format_value
// =============================================================

#[test]
fn format_pads_to_two_decimals() {
    assert_eq!(format_value("0.5").as_deref(), Some("0.50"));
    assert_eq!(format_value("3").as_deref(), Some("3.00"));
    assert_eq!(format_value("0.75").as_deref(), Some("0.75"));
}

#[test]
fn format_rounds_extra_precision() {
    assert_eq!(format_value("0.456").as_deref(), Some("0.46"));
    assert_eq!(format_value("0.123").as_deref(), Some("0.12"));
}

#[test]
fn format_rounds_exact_halves_up() {
    assert_eq!(format_value("0.125").as_deref(), Some("0.13"));
    assert_eq!(format_value("0.625").as_deref(), Some("0.63"));
    assert_eq!(format_value("0.875").as_deref(), Some("0.88"));
    assert_eq!(format_value("2.375").as_deref(), Some("2.38"));
}

#[test]
fn format_rounds_negative_halves_away_from_zero() {
    assert_eq!(format_value("-0.125").as_deref(), Some("-0.13"));
}

#[test]
fn format_keeps_near_halves_that_are_not_exact() {
    // 1.005 is stored just below the half.
    assert_eq!(format_value("1.005").as_deref(), Some("1.00"));
    assert_eq!(format_value("0.25").as_deref(), Some("0.25"));
    assert_eq!(format_value("0.5").as_deref(), Some("0.50"));
}

#[test]
fn format_negative_zero_as_zero() {
    assert_eq!(format_value("-0").as_deref(), Some("0.00"));
}

#[test]
fn format_unparseable_is_none() {
    assert!(format_value("").is_none());
    assert!(format_value("slider").is_none());
}
