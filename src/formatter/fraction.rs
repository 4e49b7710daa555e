//! Fraction rendering.

use crate::ast::FractionLayout;
use crate::formatter::number;
use crate::locale::Locale;

/// Largest denominator searched, regardless of placeholder count.
const MAX_DENOMINATOR_DIGITS: u32 = 7;

/// Render a number through a fraction layout.
pub fn format_fraction(value: f64, layout: &FractionLayout, locale: &Locale) -> String {
    let sign = value < 0.0;
    let mut value = value;

    let mut integral: i64 = 0;
    if layout.integer_part.is_some() {
        integral = value.trunc() as i64;
        value = (value - integral as f64).abs();
    }

    let (numerator, denominator) = match layout.denominator_constant {
        Some(constant) => {
            let rounded = (value * constant as f64).round();
            let whole = (rounded / constant as f64).floor();
            ((rounded - whole * constant as f64) as i64, constant)
        }
        None => {
            let digits = (number::digit_count(&layout.denominator) as u32)
                .min(MAX_DENOMINATOR_DIGITS);
            approximate(value, 10i64.pow(digits) - 1)
        }
    };

    // A zero numerator with no 0 placeholder to force it blanks the whole
    // fraction clause, leaving only the integer part; otherwise "3 0/4"
    // would render as "3" with a dangling "/4".
    let hide_fraction = layout.integer_part.is_some()
        && numerator == 0
        && number::zero_count(&layout.numerator) == 0;

    let mut out = String::new();
    if sign {
        out.push('-');
    }

    if let Some(integer_part) = &layout.integer_part {
        number::format_integer(
            &integral.unsigned_abs().to_string(),
            false,
            hide_fraction,
            integer_part,
            locale,
            &mut out,
        );
    }

    let mut fraction = String::new();
    number::format_integer(
        &numerator.unsigned_abs().to_string(),
        false,
        true,
        &layout.numerator,
        locale,
        &mut fraction,
    );
    fraction.push('/');

    if let Some(prefix) = &layout.denominator_prefix {
        number::format_integer("", false, false, prefix, locale, &mut fraction);
    }

    match layout.denominator_constant {
        Some(constant) => fraction.push_str(&constant.to_string()),
        None => format_denominator(&denominator.to_string(), &layout.denominator, &mut fraction),
    }

    if let Some(suffix) = &layout.denominator_suffix {
        number::format_integer("", false, false, suffix, locale, &mut fraction);
    }

    if hide_fraction {
        // Blank-pad so columns of mixed numbers stay aligned.
        out.extend(std::iter::repeat(' ').take(fraction.chars().count()));
    } else {
        out.push_str(&fraction);
    }

    if let Some(suffix) = &layout.fraction_suffix {
        number::format_integer("", false, false, suffix, locale, &mut out);
    }

    out
}

/// Best rational approximation of `x` with the denominator bounded by
/// `max_denominator`, by walking continued-fraction convergents and
/// backtracking one step when the bound is crossed.
fn approximate(x: f64, max_denominator: i64) -> (i64, i64) {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let mut b = x * sign;
    let bound = max_denominator as f64;

    let (mut p_prev2, mut p_prev1, mut p) = (0.0, 1.0, 0.0);
    let (mut q_prev2, mut q_prev1, mut q) = (1.0, 0.0, 0.0);

    while q_prev1 < bound {
        let a = b.floor();
        p = a * p_prev1 + p_prev2;
        q = a * q_prev1 + q_prev2;
        if (b - a) < 0.000_000_05 {
            break;
        }
        b = 1.0 / (b - a);
        p_prev2 = p_prev1;
        p_prev1 = p;
        q_prev2 = q_prev1;
        q_prev1 = q;
    }

    if q > bound {
        if q_prev1 > bound {
            q = q_prev2;
            p = p_prev2;
        } else {
            q = q_prev1;
            p = p_prev1;
        }
    }

    ((sign * p) as i64, q as i64)
}

/// Render the denominator left-aligned: for `?` placeholders the
/// insignificant leading zeros are skipped so the digits hug the slash.
fn format_denominator(digits: &str, tokens: &[String], out: &mut String) {
    let format_digits = number::digit_count(tokens);
    let padded = format!("{:0>width$}", digits, width = format_digits);
    let chars: Vec<char> = padded.chars().collect();

    let mut significant = false;
    let mut value_index = 0;
    for tok in tokens {
        let c;
        if value_index < chars.len() {
            c = left_aligned_digit(tok, &chars, &mut value_index, significant);
            if c != '0' {
                significant = true;
            }
        } else {
            c = '0';
            significant = false;
        }
        number::format_placeholder(tok, c, significant, out);
    }
}

/// Next digit for a left-aligned run. A `?` placeholder eats insignificant
/// zeros, returning the first significant digit instead.
fn left_aligned_digit(
    token: &str,
    chars: &[char],
    value_index: &mut usize,
    mut significant: bool,
) -> char {
    let mut c = chars[*value_index];
    *value_index += 1;
    if c != '0' {
        significant = true;
    }

    if token == "?" && !significant {
        while *value_index < chars.len() {
            c = chars[*value_index];
            *value_index += 1;
            if c != '0' {
                break;
            }
        }
    }

    c
}
