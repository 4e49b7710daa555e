//! Decimal number rendering.
//!
//! The integer side is right-aligned against its placeholders with
//! left-zero-padding; the fractional side is left-aligned with the
//! trailing insignificant zeros stripped before placeholder matching.
//! `0` always prints, `#` prints only significant digits, `?` prints a
//! space where `0` would print a zero. These helpers are shared with the
//! exponential and fraction formatters, which render their pieces through
//! the same placeholder machinery.

use crate::ast::DecimalLayout;
use crate::locale::Locale;
use crate::parser::token;

/// Render a number through a decimal layout.
pub fn format_number(value: f64, layout: &DecimalLayout, locale: &Locale) -> String {
    let value = value / layout.scale_divisor * layout.percent_multiplier;

    let mut out = String::new();
    format_parts(
        value,
        &layout.before_decimal,
        layout.decimal_point,
        &layout.after_decimal,
        layout.group_digits,
        locale,
        &mut out,
    );
    out
}

/// Round the value to the fractional placeholder count and render both
/// sides. Also used by the exponential formatter for the mantissa.
pub(super) fn format_parts(
    value: f64,
    before_decimal: &[String],
    decimal_point: bool,
    after_decimal: &[String],
    group_digits: bool,
    locale: &Locale,
    out: &mut String,
) {
    let decimals = digit_count(after_decimal);
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    if value < 0.0 {
        out.push('-');
    }

    format_integer(int_digits, group_digits, false, before_decimal, locale, out);

    if decimal_point {
        out.push(locale.decimal_separator);
    }

    if !after_decimal.is_empty() {
        format_decimals(frac_digits, after_decimal, out);
    }
}

/// Render an integer digit string right-aligned against a token list:
/// leading literals first, then digits in excess of the placeholder count,
/// then one digit (or pad character) per placeholder with literals
/// interleaved in pattern position.
///
/// `significant_zero` forces the last digit significant even when zero;
/// the fraction formatter uses it so numerators and lone integer parts
/// still show a 0.
pub(super) fn format_integer(
    digits: &str,
    group_digits: bool,
    significant_zero: bool,
    tokens: &[String],
    locale: &Locale,
    out: &mut String,
) {
    let format_digits = digit_count(tokens);
    let padded = pad_left(digits, format_digits);
    let chars: Vec<char> = padded.chars().collect();

    let mut significant = false;

    // Literals occurring before any placeholder.
    let mut token_index = 0;
    while token_index < tokens.len() && !token::is_placeholder(&tokens[token_index]) {
        format_literal(&tokens[token_index], out);
        token_index += 1;
    }

    // Digits in excess of the placeholder count.
    let excess = chars.len() - format_digits;
    let mut digit_index = 0;
    while digit_index < excess {
        significant = true;
        out.push(chars[digit_index]);
        if group_digits {
            push_group_separator(chars.len(), digit_index, locale, out);
        }
        digit_index += 1;
    }

    // One digit per remaining placeholder.
    while token_index < tokens.len() {
        let tok = &tokens[token_index];
        if token::is_placeholder(tok) {
            let c = chars[digit_index];
            if c != '0' || (significant_zero && digit_index == chars.len() - 1) {
                significant = true;
            }
            format_placeholder(tok, c, significant, out);
            if group_digits && (significant || tok == "0") {
                push_group_separator(chars.len(), digit_index, locale, out);
            }
            digit_index += 1;
        } else {
            format_literal(tok, out);
        }
        token_index += 1;
    }
}

/// Render a fractional digit string left-aligned against a token list.
/// `digits` arrives pre-trimmed of trailing zeros; positions past its end
/// are insignificant.
pub(super) fn format_decimals(digits: &str, tokens: &[String], out: &mut String) {
    let unpadded = digits.chars().count();
    let format_digits = digit_count(tokens);
    let padded = pad_right(digits, format_digits);
    let chars: Vec<char> = padded.chars().collect();

    let mut value_index = 0;
    for tok in tokens {
        if token::is_placeholder(tok) {
            let significant = value_index < unpadded;
            format_placeholder(tok, chars[value_index], significant, out);
            value_index += 1;
        } else {
            format_literal(tok, out);
        }
    }
}

/// Emit one digit position according to its placeholder kind.
pub(super) fn format_placeholder(token: &str, c: char, significant: bool, out: &mut String) {
    match token {
        "0" => out.push(if significant { c } else { '0' }),
        "#" => {
            if significant {
                out.push(c);
            }
        }
        "?" => out.push(if significant { c } else { ' ' }),
        _ => {}
    }
}

/// Emit a literal token: escapes resolve to their character, `_x` to a
/// space, quoted text verbatim, grouping commas to nothing.
pub(super) fn format_literal(token: &str, out: &mut String) {
    if token == "," {
        return;
    }

    let mut chars = token.chars();
    let first = chars.next();
    let second = chars.next();
    let is_pair = second.is_some() && chars.next().is_none();

    match first {
        // TODO: '*' should repeat the fill character to the cell width.
        Some('*') | Some('\\') if is_pair => out.push(second.unwrap_or_default()),
        Some('_') if is_pair => out.push(' '),
        Some('"') => out.push_str(token.trim_matches('"')),
        _ => out.push_str(token),
    }
}

/// Group separator between digit positions, counted from the right.
fn push_group_separator(total_digits: usize, digit_index: usize, locale: &Locale, out: &mut String) {
    let position_in_tens = total_digits - 1 - digit_index;
    if position_in_tens > 0 && position_in_tens % 3 == 0 {
        out.push(locale.group_separator);
    }
}

/// Number of digit placeholders in a token list.
pub(super) fn digit_count(tokens: &[String]) -> usize {
    tokens.iter().filter(|t| token::is_placeholder(t)).count()
}

/// Number of `0` placeholders in a token list.
pub(super) fn zero_count(tokens: &[String]) -> usize {
    tokens.iter().filter(|t| *t == "0").count()
}

fn pad_left(digits: &str, width: usize) -> String {
    let len = digits.chars().count();
    if len >= width {
        digits.to_string()
    } else {
        format!("{}{}", "0".repeat(width - len), digits)
    }
}

fn pad_right(digits: &str, width: usize) -> String {
    let len = digits.chars().count();
    if len >= width {
        digits.to_string()
    } else {
        format!("{}{}", digits, "0".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_format_integer_padding() {
        let mut out = String::new();
        format_integer("5", false, false, &strs(&["0", "0", "0"]), &Locale::en_us(), &mut out);
        assert_eq!(out, "005");

        let mut out = String::new();
        format_integer("5", false, false, &strs(&["?", "?", "0"]), &Locale::en_us(), &mut out);
        assert_eq!(out, "  5");

        let mut out = String::new();
        format_integer("5", false, false, &strs(&["#", "#", "#"]), &Locale::en_us(), &mut out);
        assert_eq!(out, "5");
    }

    #[test]
    fn test_format_integer_grouping() {
        let mut out = String::new();
        format_integer(
            "1234567",
            true,
            false,
            &strs(&["#", ",", "#", "#", "0"]),
            &Locale::en_us(),
            &mut out,
        );
        assert_eq!(out, "1,234,567");
    }

    #[test]
    fn test_format_decimals_trailing() {
        // "5" left-aligned against 0#: the second position is padding.
        let mut out = String::new();
        format_decimals("5", &strs(&["0", "#"]), &mut out);
        assert_eq!(out, "5");

        let mut out = String::new();
        format_decimals("5", &strs(&["0", "0"]), &mut out);
        assert_eq!(out, "50");
    }

    #[test]
    fn test_format_literal_shapes() {
        let mut out = String::new();
        format_literal("\"kr \"", &mut out);
        format_literal("\\y", &mut out);
        format_literal("_)", &mut out);
        format_literal("*x", &mut out);
        format_literal(",", &mut out);
        format_literal("(", &mut out);
        assert_eq!(out, "kr y x(");
    }
}
