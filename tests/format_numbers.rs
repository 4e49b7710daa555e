//! Decimal number formatting against exact expected cell text.

use cellfmt::{FormatOptions, NumberFormat};

fn fmt(pattern: &str, value: f64) -> String {
    let parsed = NumberFormat::parse(pattern).unwrap();
    parsed.format(value, &FormatOptions::default())
}

// ============================================================================
// Placeholder rules
// ============================================================================

#[test]
fn test_zero_placeholders_pad() {
    assert_eq!(fmt("0.00", 0.0), "0.00");
    assert_eq!(fmt("0.00", 3.1), "3.10");
    assert_eq!(fmt("000", 5.0), "005");
    assert_eq!(fmt("0.0", 12.345), "12.3");
}

#[test]
fn test_hash_suppresses_insignificant_digits() {
    assert_eq!(fmt("#.##", 3.5), "3.5");
    assert_eq!(fmt("#.##", 3.0), "3");
    // With no forced digit anywhere, a zero collapses to just the point.
    assert_eq!(fmt("#.##", 0.0), ".");
}

#[test]
fn test_question_mark_pads_with_spaces() {
    assert_eq!(fmt("??0", 5.0), "  5");
    assert_eq!(fmt("0.0?", 1.5), "1.5 ");
    assert_eq!(fmt("0.0?", 1.55), "1.55");
}

#[test]
fn test_rounding_to_placeholder_count() {
    assert_eq!(fmt("0.00", 1.456), "1.46");
    assert_eq!(fmt("0", 1.6), "2");
}

// ============================================================================
// Grouping and scaling commas
// ============================================================================

#[test]
fn test_thousands_grouping() {
    assert_eq!(fmt("#,##0", 1234567.0), "1,234,567");
    assert_eq!(fmt("#,##0", 123.0), "123");
    assert_eq!(fmt("#,##0.00", 1234.5), "1,234.50");
}

#[test]
fn test_trailing_comma_scales_by_thousands() {
    assert_eq!(fmt("#,##0,", 1234567.0), "1,235");
    assert_eq!(fmt("0,,", 2600000.0), "3");
}

// ============================================================================
// Percent and literals
// ============================================================================

#[test]
fn test_percent_multiplies_and_displays() {
    assert_eq!(fmt("0%", 0.5), "50%");
    assert_eq!(fmt("0.0%", 0.123), "12.3%");
}

#[test]
fn test_quoted_and_escaped_literals() {
    assert_eq!(fmt("\"Value: \"0", 42.0), "Value: 42");
    assert_eq!(fmt("0\\h", 7.0), "7h");
    // Skip characters render as a space of their width.
    assert_eq!(fmt("_-0_-", 42.0), " 42 ");
}

#[test]
fn test_currency_directive() {
    assert_eq!(fmt("[$€-407]#,##0.00", 1234.5), "€1,234.50");
}

// ============================================================================
// Sign handling
// ============================================================================

#[test]
fn test_single_section_keeps_sign() {
    assert_eq!(fmt("0.00", -5.5), "-5.50");
}

#[test]
fn test_negative_section_implies_sign() {
    // The parentheses stand in for the sign; digits render unsigned.
    assert_eq!(fmt("0.00;(0.00)", -5.0), "(5.00)");
    assert_eq!(fmt("0.00;(0.00)", 5.0), "5.00");
}

// ============================================================================
// General sections
// ============================================================================

#[test]
fn test_general_renders_plain_form() {
    assert_eq!(fmt("General", 1234.5), "1234.5");
    assert_eq!(fmt("General", -0.25), "-0.25");
}

#[test]
fn test_general_mixes_with_literals() {
    assert_eq!(fmt("\"~\"General\"~\"", 42.0), "~42~");
}
