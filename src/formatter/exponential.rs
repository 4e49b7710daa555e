//! Scientific notation rendering.

use crate::ast::ExponentialLayout;
use crate::formatter::number;
use crate::locale::Locale;

/// Render a number through an exponential layout.
///
/// The exponent is normalized so the mantissa has one digit before the
/// point; with more than one integer placeholder the point shifts left by
/// `|exponent| mod placeholders`, giving engineering-style groupings
/// (`##0.0E+0` steps the exponent by threes).
pub fn format_exponential(value: f64, layout: &ExponentialLayout, locale: &Locale) -> String {
    let base_digits = number::digit_count(&layout.before_decimal) as i32;

    let (mut mantissa, mut exponent) = if value == 0.0 || !value.is_finite() {
        (value, 0)
    } else {
        let exponent = value.abs().log10().floor() as i32;
        (value / 10f64.powi(exponent), exponent)
    };

    if base_digits > 0 {
        let mut shift = exponent.abs() % base_digits;
        if shift > 0 {
            if exponent < 0 {
                shift = base_digits - shift;
            }
            mantissa *= 10f64.powi(shift);
            exponent -= shift;
        }
    }

    let mut out = String::new();
    number::format_parts(
        mantissa,
        &layout.before_decimal,
        layout.decimal_point,
        &layout.after_decimal,
        false,
        locale,
        &mut out,
    );

    let mut marker = layout.marker.chars();
    out.push(marker.next().unwrap_or('E'));

    // A '+' marker shows the sign of every exponent; a '-' marker only
    // shows negative ones.
    if marker.next() == Some('+') && exponent >= 0 {
        out.push('+');
    } else if exponent < 0 {
        out.push('-');
    }

    number::format_integer(
        &exponent.abs().to_string(),
        false,
        false,
        &layout.power,
        locale,
        &mut out,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{NumberFormat, SectionKind};

    fn render(pattern: &str, value: f64) -> String {
        let fmt = NumberFormat::parse(pattern).unwrap();
        match &fmt.sections()[0].kind {
            SectionKind::Exponential(layout) => {
                format_exponential(value, layout, &Locale::en_us())
            }
            other => panic!("expected exponential section, got {other:?}"),
        }
    }

    #[test]
    fn test_basic() {
        assert_eq!(render("0.00E+00", 12345.0), "1.23E+04");
        assert_eq!(render("0.00E+00", 0.00012), "1.20E-04");
    }

    #[test]
    fn test_minus_marker_hides_positive_sign() {
        assert_eq!(render("0.00E-00", 12345.0), "1.23E04");
        assert_eq!(render("0.00E-00", 0.00012), "1.20E-04");
    }

    #[test]
    fn test_engineering_grouping() {
        assert_eq!(render("##0.0E+0", 12345.0), "12.3E+3");
    }

    #[test]
    fn test_zero() {
        assert_eq!(render("0.00E+00", 0.0), "0.00E+00");
    }
}
