//! Elapsed time rendering.
//!
//! Bracketed tokens (`[h]`, `[mm]`, `[ss]`) print running totals across
//! unit boundaries; the span is then reduced to the sub-unit remainder so
//! later tokens continue from what is left. At most one of each bracketed
//! unit is expected per pattern. Plain `m`/`s` tokens print the calendar
//! component of the remainder.

use chrono::TimeDelta;

use crate::formatter::date::push_padded;
use crate::formatter::number::format_literal;
use crate::parser::token;

/// Render a time span through a duration section's token stream.
pub fn format_duration(span: TimeDelta, tokens: &[String]) -> String {
    let subseconds_shown = tokens.iter().any(|t| t.starts_with(".0"));

    let mut out = String::new();
    let mut rest = span;
    for tok in tokens {
        let width = tok.chars().count();

        if token::starts_with_letter(tok, 'm') {
            push_padded(&mut out, minutes_of(&rest), width);
        } else if token::starts_with_letter(tok, 's') {
            // Without a subsecond token, milliseconds round into the
            // seconds display (half away from zero).
            let carry = if subseconds_shown {
                0.0
            } else {
                millis_of(&rest) as f64 / 1000.0
            };
            let seconds = (seconds_of(&rest) as f64 + carry).round() as i64;
            push_padded(&mut out, seconds, width);
        } else if is_elapsed(tok, 'h') {
            push_padded(&mut out, rest.num_hours(), width - 2);
            rest = TimeDelta::minutes(minutes_of(&rest).abs())
                + TimeDelta::seconds(seconds_of(&rest).abs())
                + TimeDelta::milliseconds(millis_of(&rest).abs());
        } else if is_elapsed(tok, 'm') {
            push_padded(&mut out, rest.num_minutes(), width - 2);
            rest = TimeDelta::seconds(seconds_of(&rest).abs())
                + TimeDelta::milliseconds(millis_of(&rest).abs());
        } else if is_elapsed(tok, 's') {
            push_padded(&mut out, rest.num_seconds(), width - 2);
            rest = TimeDelta::milliseconds(millis_of(&rest).abs());
        } else if tok.starts_with(".0") {
            out.push('.');
            push_padded(&mut out, millis_of(&rest), width - 1);
        } else {
            format_literal(tok, &mut out);
        }
    }

    out
}

/// Bracketed elapsed token for the given unit letter.
fn is_elapsed(tok: &str, letter: char) -> bool {
    let mut chars = tok.chars();
    chars.next() == Some('[')
        && chars
            .next()
            .is_some_and(|c| c.to_ascii_lowercase() == letter)
}

fn minutes_of(span: &TimeDelta) -> i64 {
    span.num_minutes() % 60
}

fn seconds_of(span: &TimeDelta) -> i64 {
    span.num_seconds() % 60
}

fn millis_of(span: &TimeDelta) -> i64 {
    span.num_milliseconds() % 1000
}
