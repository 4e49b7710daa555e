//! Which section of a multi-section pattern governs a value.

use cellfmt::{FormatOptions, NumberFormat, Value};
use chrono::NaiveDate;

fn fmt(pattern: &str, value: f64) -> String {
    let parsed = NumberFormat::parse(pattern).unwrap();
    parsed.format(value, &FormatOptions::default())
}

// ============================================================================
// Positional selection
// ============================================================================

#[test]
fn test_positive_negative_zero_sections() {
    // The bare minus is a literal-only section, shown for exact zero.
    let pattern = "0.00;(0.00);-";
    assert_eq!(fmt(pattern, 5.0), "5.00");
    assert_eq!(fmt(pattern, -5.0), "(5.00)");
    assert_eq!(fmt(pattern, 0.0), "-");
}

#[test]
fn test_two_sections_zero_is_positive() {
    let pattern = "0.0;(0.0)";
    assert_eq!(fmt(pattern, 0.0), "0.0");
    assert_eq!(fmt(pattern, -1.0), "(1.0)");
}

#[test]
fn test_single_section_takes_everything() {
    assert_eq!(fmt("0.0", 2.5), "2.5");
    assert_eq!(fmt("0.0", -2.5), "-2.5");
    assert_eq!(fmt("0.0", 0.0), "0.0");
}

// ============================================================================
// Conditions
// ============================================================================

#[test]
fn test_condition_sections() {
    let pattern = "[>100]0.0;[<0]-0.0;0";
    assert_eq!(fmt(pattern, 150.0), "150.0");
    assert_eq!(fmt(pattern, -3.0), "-3.0");
    // Neither condition matches: the third section is the remainder.
    assert_eq!(fmt(pattern, 50.0), "50");
}

#[test]
fn test_failed_condition_falls_to_second_of_two() {
    let pattern = "[>100]0.0;0.00";
    assert_eq!(fmt(pattern, 150.0), "150.0");
    assert_eq!(fmt(pattern, 50.0), "50.00");
}

#[test]
fn test_conditioned_section_formats_absolute_value() {
    // The matching condition implies the sign, so the digits are unsigned.
    assert_eq!(fmt("[<0]0.0\" below\";0.0", -7.5), "7.5 below");
}

// ============================================================================
// Non-numeric values
// ============================================================================

#[test]
fn test_text_uses_fourth_section() {
    let parsed = NumberFormat::parse("0;(0);\"-\";\"<\"@\">\"").unwrap();
    let opts = FormatOptions::default();
    assert_eq!(parsed.format("abc", &opts), "<abc>");
}

#[test]
fn test_text_without_fourth_section_passes_through() {
    let parsed = NumberFormat::parse("0.00").unwrap();
    let opts = FormatOptions::default();
    assert_eq!(parsed.format("abc", &opts), "abc");
}

#[test]
fn test_datetime_finds_first_date_section() {
    let parsed = NumberFormat::parse("0.00;yyyy-mm-dd").unwrap();
    let opts = FormatOptions::default();
    let stamp = NaiveDate::from_ymd_opt(2026, 1, 9)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(parsed.format(stamp, &opts), "2026-01-09");
}

#[test]
fn test_duration_selects_by_day_count() {
    // A negative span takes the negative section like a negative number.
    let parsed = NumberFormat::parse("[h]:mm;\"minus \"[h]:mm").unwrap();
    let opts = FormatOptions::default();
    let span = chrono::TimeDelta::hours(-3);
    assert_eq!(parsed.format(Value::Duration(span), &opts), "minus -3:00");
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_repeated_calls_are_identical() {
    let parsed = NumberFormat::parse("#,##0.00;[Red](#,##0.00)").unwrap();
    let opts = FormatOptions::default();
    let first = parsed.format(-1234.5, &opts);
    for _ in 0..3 {
        assert_eq!(parsed.format(-1234.5, &opts), first);
    }
    assert_eq!(first, "(1,234.50)");
}
