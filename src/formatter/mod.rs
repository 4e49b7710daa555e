//! Rendering engine: section dispatch and the fallback path.

mod date;
mod duration;
mod exponential;
mod fraction;
mod number;

use chrono::TimeDelta;

use crate::ast::{NumberFormat, Section, SectionKind};
use crate::date_serial::ExcelDateTime;
use crate::error::FormatError;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::parser::token;
use crate::value::Value;

impl NumberFormat {
    /// Format a value using this pattern.
    ///
    /// Never fails: when no section applies or the applicable section
    /// cannot render the value, the result degrades to a plain rendering
    /// of the value, as spreadsheet applications do.
    pub fn format<'a>(&self, value: impl Into<Value<'a>>, opts: &FormatOptions) -> String {
        let value = value.into();
        match self.try_format_value(&value, opts) {
            Ok(result) => result,
            Err(_) => compatible_string(&value, &opts.locale),
        }
    }

    /// Format a value, reporting why the pattern could not be applied
    /// instead of falling back.
    pub fn try_format<'a>(
        &self,
        value: impl Into<Value<'a>>,
        opts: &FormatOptions,
    ) -> Result<String, FormatError> {
        self.try_format_value(&value.into(), opts)
    }

    fn try_format_value(&self, value: &Value, opts: &FormatOptions) -> Result<String, FormatError> {
        let section = crate::evaluator::select_section(self.sections(), value)
            .ok_or(FormatError::NoMatchingSection)?;
        format_section(value, section, opts)
    }
}

/// Render a value through one selected section.
fn format_section(
    value: &Value,
    section: &Section,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    match &section.kind {
        SectionKind::Number(layout) => {
            let mut n = expect_number(value)?;
            // A conditioned first section or the negative section implies
            // the sign; the digits render unsigned.
            if (section.index == 0 && section.condition.is_some()) || section.index == 1 {
                n = n.abs();
            }
            Ok(number::format_number(n, layout, &opts.locale))
        }

        SectionKind::Exponential(layout) => Ok(exponential::format_exponential(
            expect_number(value)?,
            layout,
            &opts.locale,
        )),

        SectionKind::Fraction(layout) => Ok(fraction::format_fraction(
            expect_number(value)?,
            layout,
            &opts.locale,
        )),

        SectionKind::Date(tokens) => {
            let date = ExcelDateTime::try_convert(value, opts.date_system)?;
            Ok(date::format_date(&date, tokens, &opts.locale))
        }

        SectionKind::Duration(tokens) => {
            let span = expect_duration(value)?;
            Ok(duration::format_duration(span, tokens))
        }

        SectionKind::General(tokens) | SectionKind::Text(tokens) => Ok(format_general_text(
            &compatible_string(value, &opts.locale),
            tokens,
        )),
    }
}

fn expect_number(value: &Value) -> Result<f64, FormatError> {
    value.as_number().ok_or(FormatError::TypeMismatch {
        expected: "number",
        got: value.type_name(),
    })
}

fn expect_duration(value: &Value) -> Result<TimeDelta, FormatError> {
    match value {
        Value::Duration(span) => Ok(*span),
        Value::Number(days) => {
            let millis = days * 86_400_000.0;
            if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
                return Err(FormatError::TypeMismatch {
                    expected: "duration",
                    got: "number",
                });
            }
            TimeDelta::try_milliseconds(millis.round() as i64).ok_or(FormatError::TypeMismatch {
                expected: "duration",
                got: "number",
            })
        }
        other => Err(FormatError::TypeMismatch {
            expected: "duration",
            got: other.type_name(),
        }),
    }
}

/// General and text sections: the stringified value replaces `General`
/// and `@` tokens, everything else renders as literal.
fn format_general_text(text: &str, tokens: &[String]) -> String {
    let mut out = String::new();
    for tok in tokens {
        if token::is_general(tok) || tok == "@" {
            out.push_str(text);
        } else {
            number::format_literal(tok, &mut out);
        }
    }
    out
}

/// Plain rendering used whenever a pattern cannot be applied: numbers in a
/// 15-significant-digit general form, the rest in fixed shapes.
pub(crate) fn compatible_string(value: &Value, locale: &Locale) -> String {
    match value {
        Value::Number(n) => general_number_string(*n, locale),
        Value::Text(s) => (*s).to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Value::Duration(span) => duration_string(*span),
    }
}

/// 15-significant-digit general form: fixed notation while the decimal
/// exponent is in `[-5, 15)`, scientific (`1.5E+16`) outside it.
fn general_number_string(value: f64, locale: &Locale) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // 14 decimal places in exponential form = 15 significant digits.
    let formatted = format!("{:.14e}", value);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let negative = mantissa.starts_with('-');
    let all_digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let trimmed = all_digits.trim_end_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if (-5..15).contains(&exponent) {
        if exponent < 0 {
            out.push('0');
            out.push(locale.decimal_separator);
            for _ in 0..(-exponent - 1) {
                out.push('0');
            }
            out.push_str(digits);
        } else if exponent as usize + 1 >= digits.len() {
            out.push_str(digits);
            for _ in 0..(exponent as usize + 1 - digits.len()) {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..exponent as usize + 1]);
            out.push(locale.decimal_separator);
            out.push_str(&digits[exponent as usize + 1..]);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push(locale.decimal_separator);
            out.push_str(&digits[1..]);
        }
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.abs()));
    }

    out
}

/// `[-][d.]hh:mm:ss[.fff]`, the shape spreadsheet backends use for raw
/// time spans.
fn duration_string(span: TimeDelta) -> String {
    let negative = span < TimeDelta::zero();
    let days = span.num_days().abs();
    let hours = (span.num_hours() % 24).abs();
    let minutes = (span.num_minutes() % 60).abs();
    let seconds = (span.num_seconds() % 60).abs();
    let millis = (span.num_milliseconds() % 1000).abs();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&days.to_string());
        out.push('.');
    }
    out.push_str(&format!("{hours:02}:{minutes:02}:{seconds:02}"));
    if millis > 0 {
        out.push_str(&format!(".{millis:03}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_number_string() {
        let locale = Locale::en_us();
        assert_eq!(general_number_string(0.0, &locale), "0");
        assert_eq!(general_number_string(42.0, &locale), "42");
        assert_eq!(general_number_string(-42.5, &locale), "-42.5");
        // Binary noise beyond 15 significant digits disappears.
        assert_eq!(general_number_string(0.1 + 0.2, &locale), "0.3");
        assert_eq!(general_number_string(0.00001, &locale), "0.00001");
        assert_eq!(general_number_string(1.5e16, &locale), "1.5E+16");
        assert_eq!(general_number_string(2.5e-7, &locale), "2.5E-07");
    }

    #[test]
    fn test_duration_string() {
        assert_eq!(duration_string(TimeDelta::seconds(3661)), "01:01:01");
        assert_eq!(
            duration_string(TimeDelta::days(2) + TimeDelta::hours(3)),
            "2.03:00:00"
        );
        assert_eq!(duration_string(TimeDelta::seconds(-90)), "-00:01:30");
    }

    #[test]
    fn test_general_text_section() {
        let tokens: Vec<String> = vec!["\"val: \"".to_string(), "@".to_string()];
        assert_eq!(format_general_text("abc", &tokens), "val: abc");
    }
}
