//! Parser for ECMA-376 number format patterns.
//!
//! A pattern is split on top-level `;` into sections. Each section is
//! tokenized, its bracketed directives (condition, color, currency) are
//! pulled out, and the remaining token stream is classified: date parts
//! make it a date or duration section, `General` or `@` make it general or
//! text, and anything else must parse as one of the three numeric layouts,
//! trying fraction, then exponential, then decimal.

pub mod lexer;
pub mod token;

use crate::ast::{
    CompareOp, Condition, DecimalLayout, ExponentialLayout, FractionLayout, NamedColor, Section,
    SectionKind,
};
use crate::error::ParseError;
use lexer::Lexer;

/// Parse a format pattern into its sections.
///
/// An empty pattern yields an empty section list, which no value matches;
/// that is not an error. Unparsable patterns are.
pub fn parse(pattern: &str) -> Result<Vec<Section>, ParseError> {
    let mut lexer = Lexer::new(pattern);
    let mut sections = Vec::new();
    while let Some(section) = parse_section(&mut lexer, sections.len())? {
        sections.push(section);
    }
    Ok(sections)
}

/// Parse one section. Returns `Ok(None)` when no tokens remain, which ends
/// section collection.
fn parse_section(lexer: &mut Lexer, index: usize) -> Result<Option<Section>, ParseError> {
    let mut has_date_parts = false;
    let mut has_duration_parts = false;
    let mut has_general_part = false;
    let mut has_text_part = false;
    let mut has_placeholders = false;
    let mut condition = None;
    let mut color = None;
    let mut tokens: Vec<String> = Vec::new();

    while let Some(tok) = lexer.next_token()? {
        if tok == ";" {
            break;
        }

        has_placeholders |= token::is_placeholder(&tok);

        if token::is_date_part(&tok) {
            has_date_parts = true;
            has_duration_parts |= token::is_duration_part(&tok);
            tokens.push(tok);
        } else if token::is_general(&tok) {
            has_general_part = true;
            tokens.push(tok);
        } else if tok == "@" {
            has_text_part = true;
            tokens.push(tok);
        } else if tok.starts_with('[') {
            // Elapsed-time brackets were consumed as date parts above, so
            // whatever remains is a directive. Unrecognized directives are
            // dropped.
            let directive = inner_text(&tok);
            if let Some(parsed) = parse_condition(directive) {
                condition = Some(parsed);
            } else if let Ok(parsed) = directive.parse::<NamedColor>() {
                color = Some(parsed);
            } else if let Some(symbol) = parse_currency_symbol(directive) {
                tokens.push(format!("\"{symbol}\""));
            }
        } else {
            tokens.push(tok);
        }
    }

    if tokens.is_empty() {
        return Ok(None);
    }

    if (has_date_parts && (has_general_part || has_text_part))
        || (has_general_part && has_text_part)
    {
        return Err(ParseError::MixedParts { index });
    }

    let kind = if has_date_parts {
        let tokens = collapse_milliseconds(tokens);
        if has_duration_parts {
            SectionKind::Duration(tokens)
        } else {
            SectionKind::Date(tokens)
        }
    } else if has_general_part {
        SectionKind::General(tokens)
    } else if has_text_part || !has_placeholders {
        SectionKind::Text(tokens)
    } else if let Some(layout) = parse_fraction_layout(&tokens) {
        SectionKind::Fraction(layout)
    } else if let Some(layout) = parse_exponential_layout(&tokens) {
        SectionKind::Exponential(layout)
    } else if let Some(layout) = parse_decimal_layout(&tokens) {
        SectionKind::Number(layout)
    } else {
        return Err(ParseError::UnrecognizedLayout { index });
    };

    Ok(Some(Section {
        index,
        condition,
        color,
        kind,
    }))
}

/// The text between a token's enclosing brackets.
fn inner_text(token: &str) -> &str {
    token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(token)
}

/// Collapse `.` followed by a run of `0` tokens into one subsecond token
/// (`.0`, `.00`, ...), so the date and duration formatters see a single
/// millisecond field.
fn collapse_milliseconds(tokens: Vec<String>) -> Vec<String> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] == "." {
            let mut zeros = 0;
            while i + 1 < tokens.len() && tokens[i + 1] == "0" {
                i += 1;
                zeros += 1;
            }
            if zeros > 0 {
                result.push(format!(".{}", "0".repeat(zeros)));
            } else {
                result.push(".".to_string());
            }
        } else {
            result.push(tokens[i].clone());
        }
        i += 1;
    }
    result
}

/// Parse a bracketed condition: a comparison operator followed by a signed
/// decimal number, optionally in exponential notation. Trailing text after
/// the number is ignored.
fn parse_condition(directive: &str) -> Option<Condition> {
    const OPS: [(&str, CompareOp); 6] = [
        ("<=", CompareOp::LessOrEqual),
        ("<>", CompareOp::NotEqual),
        ("<", CompareOp::LessThan),
        (">=", CompareOp::GreaterOrEqual),
        (">", CompareOp::GreaterThan),
        ("=", CompareOp::Equal),
    ];

    for (text, op) in OPS {
        if let Some(rest) = directive.strip_prefix(text) {
            let len = scan_condition_number(rest)?;
            let value = rest[..len].parse::<f64>().ok()?;
            return Some(Condition { op, value });
        }
    }
    None
}

/// Length of the leading `[-]digits[.digits][e±digits]` prefix of `s`, or
/// `None` when no number is present or the exponent is malformed.
fn scan_condition_number(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        has_digits |= i > frac_start;
    }
    if !has_digits {
        return None;
    }
    if i + 1 < bytes.len()
        && (bytes[i] == b'e' || bytes[i] == b'E')
        && (bytes[i + 1] == b'+' || bytes[i + 1] == b'-')
    {
        let exp_start = i + 2;
        let mut j = exp_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == exp_start {
            return None;
        }
        i = j;
    }
    Some(i)
}

/// Extract the currency symbol from a `[$symbol-lcid]` directive. The
/// locale id after the hyphen is discarded.
fn parse_currency_symbol(directive: &str) -> Option<&str> {
    let rest = directive.strip_prefix('$')?;
    match rest.find('-') {
        Some(hyphen) => Some(&rest[..hyphen]),
        None => Some(rest),
    }
}

/// Result of scanning a run of number tokens: how many tokens were
/// consumed, the tokens on each side of the decimal point, and whether a
/// decimal point was seen.
struct NumberTokens {
    consumed: usize,
    before_decimal: Vec<String>,
    decimal_point: bool,
    after_decimal: Vec<String>,
}

/// Consume placeholders and literals forming a number with optional
/// decimals, from the start of `tokens`. Stops at the first token that is
/// not part of such a layout.
fn scan_number_tokens(tokens: &[String]) -> NumberTokens {
    let mut before: Option<Vec<String>> = None;
    let mut decimal_point = false;
    let mut remainder: Vec<String> = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        let tok = &tokens[index];
        if tok == "." && before.is_none() {
            decimal_point = true;
            before = Some(tokens[..index].to_vec());
            remainder = Vec::new();
        } else if token::is_number_literal(tok) {
            remainder.push(tok.clone());
        } else if tok.starts_with('[') {
            // Bracket remnants contribute nothing to the layout.
        } else {
            break;
        }
        index += 1;
    }

    let (before_decimal, after_decimal) = if remainder.is_empty() {
        (before.unwrap_or_default(), Vec::new())
    } else {
        match before {
            Some(b) => (b, remainder),
            None => (remainder, Vec::new()),
        }
    };

    NumberTokens {
        consumed: index,
        before_decimal,
        decimal_point,
        after_decimal,
    }
}

/// Recognize a plain decimal layout. Succeeds only when the whole token
/// stream forms one number.
fn parse_decimal_layout(tokens: &[String]) -> Option<DecimalLayout> {
    let scan = scan_number_tokens(tokens);
    if scan.consumed != tokens.len() {
        return None;
    }

    let (scale_divisor, group_digits) = trailing_comma_scale(tokens);
    let percent_multiplier = if tokens.iter().any(|t| t == "%") {
        100.0
    } else {
        1.0
    };

    Some(DecimalLayout {
        before_decimal: scan.before_decimal,
        decimal_point: scan.decimal_point,
        after_decimal: scan.after_decimal,
        group_digits,
        scale_divisor,
        percent_multiplier,
    })
}

/// Scan comma literals backwards from the last placeholder: each comma
/// directly after it divides the value by 1000; any comma further left
/// turns on group separators.
fn trailing_comma_scale(tokens: &[String]) -> (f64, bool) {
    let mut divisor = 1.0;
    let mut seen_last_placeholder = false;

    for j in 0..tokens.len() {
        let token_index = tokens.len() - 1 - j;
        let tok = &tokens[token_index];

        if !seen_last_placeholder {
            if token::is_placeholder(tok) {
                for following in &tokens[token_index + 1..] {
                    if following == "," {
                        divisor *= 1000.0;
                    } else {
                        break;
                    }
                }
                seen_last_placeholder = true;
            }
        } else if tok == "," {
            return (divisor, true);
        }
    }

    (divisor, false)
}

/// Recognize an exponential layout: a non-empty mantissa, an exponent
/// marker, and the remaining tokens as exponent digit placeholders.
fn parse_exponential_layout(tokens: &[String]) -> Option<ExponentialLayout> {
    let scan = scan_number_tokens(tokens);
    if scan.consumed == 0 {
        return None;
    }

    let marker = tokens.get(scan.consumed).filter(|t| token::is_exponent(t))?;

    Some(ExponentialLayout {
        before_decimal: scan.before_decimal,
        decimal_point: scan.decimal_point,
        after_decimal: scan.after_decimal,
        marker: marker.clone(),
        power: tokens[scan.consumed + 1..].to_vec(),
    })
}

/// Recognize a fraction layout around the single `/` token.
fn parse_fraction_layout(tokens: &[String]) -> Option<FractionLayout> {
    let slash = tokens.iter().position(|t| t == "/")?;
    let (integer_part, numerator) = split_numerator(&tokens[..slash]);
    let denom = split_denominator(&tokens[slash + 1..])?;

    Some(FractionLayout {
        integer_part,
        numerator,
        denominator_prefix: denom.prefix,
        denominator: denom.placeholders,
        denominator_constant: denom.constant,
        denominator_suffix: denom.suffix,
        fraction_suffix: denom.fraction_suffix,
    })
}

/// Split the tokens left of the slash into an optional integer part and
/// the numerator. Scanning right to left, a literal gap between two
/// placeholder runs marks the boundary (`# ?/?`); without a gap the whole
/// run is the numerator.
fn split_numerator(tokens: &[String]) -> (Option<Vec<String>>, Vec<String>) {
    let mut has_placeholder = false;
    let mut has_gap = false;
    let mut numerator_index = 0;

    let mut index = tokens.len();
    while index > 0 {
        index -= 1;
        let tok = &tokens[index];
        if token::is_placeholder(tok) {
            if has_gap {
                // A placeholder before the gap: everything up to the gap is
                // the integer part.
                return (
                    Some(tokens[..numerator_index].to_vec()),
                    tokens[numerator_index..].to_vec(),
                );
            }
            has_placeholder = true;
        } else if has_placeholder && !has_gap {
            has_gap = true;
            numerator_index = index + 1;
        }
    }

    (None, tokens.to_vec())
}

struct DenominatorParts {
    prefix: Option<Vec<String>>,
    placeholders: Vec<String>,
    constant: Option<i64>,
    suffix: Option<Vec<String>>,
    fraction_suffix: Option<Vec<String>>,
}

/// Split the tokens right of the slash. Leading literals are the prefix;
/// then either a placeholder run or a digit constant; a trailing literal
/// run with no placeholders is the fraction suffix, and anything between
/// is the denominator suffix.
fn split_denominator(tokens: &[String]) -> Option<DenominatorParts> {
    let mut index = 0;
    let mut has_placeholder = false;
    let mut has_constant = false;

    while index < tokens.len() {
        let tok = &tokens[index];
        if token::is_placeholder(tok) {
            has_placeholder = true;
            break;
        }
        if token::is_digit_1_9(tok) {
            has_constant = true;
            break;
        }
        index += 1;
    }

    if !has_placeholder && !has_constant {
        return None;
    }

    let denominator_index = index;
    let mut constant_digits = String::new();

    while index < tokens.len() {
        let tok = &tokens[index];
        if has_placeholder && token::is_placeholder(tok) {
            // Part of the placeholder run.
        } else if has_constant && token::is_digit_0_9(tok) {
            constant_digits.push_str(tok);
        } else {
            break;
        }
        index += 1;
    }

    let mut fraction_suffix_index = tokens.len();
    while fraction_suffix_index > index {
        if token::is_placeholder(&tokens[fraction_suffix_index - 1]) {
            break;
        }
        fraction_suffix_index -= 1;
    }

    let constant = if has_constant {
        Some(constant_digits.parse::<i64>().ok()?)
    } else {
        None
    };

    Some(DenominatorParts {
        prefix: (denominator_index > 0).then(|| tokens[..denominator_index].to_vec()),
        placeholders: tokens[denominator_index..index].to_vec(),
        constant,
        suffix: (index < fraction_suffix_index)
            .then(|| tokens[index..fraction_suffix_index].to_vec()),
        fraction_suffix: (fraction_suffix_index < tokens.len())
            .then(|| tokens[fraction_suffix_index..].to_vec()),
    })
}
