//! Date and time rendering.

use crate::date_serial::ExcelDateTime;
use crate::formatter::number::format_literal;
use crate::locale::Locale;
use crate::parser::token;

/// Render a timestamp through a date section's token stream.
pub fn format_date(date: &ExcelDateTime, tokens: &[String], locale: &Locale) -> String {
    let twelve_hour = contains_am_pm(tokens);

    let mut out = String::new();
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        let width = tok.chars().count();

        if token::starts_with_letter(tok, 'y') {
            let digits = match width {
                0 | 1 => 2,
                3 => 4,
                w => w,
            };
            let year = if digits == 2 {
                date.year() % 100
            } else {
                date.year()
            };
            push_padded(&mut out, year as i64, digits);
        } else if token::starts_with_letter(tok, 'm') {
            // An m-run directly after hours or directly before seconds
            // means minutes, not months.
            if looking_back_at(tokens, i, 'h') || looking_ahead_at(tokens, i + 1, 's') {
                push_padded(&mut out, date.minute() as i64, width);
            } else {
                let month = date.month() as usize;
                match width {
                    3 => out.push_str(locale.months_abbr[month - 1]),
                    4 => out.push_str(locale.months_full[month - 1]),
                    5 => {
                        if let Some(initial) = locale.months_full[month - 1].chars().next() {
                            out.push(initial);
                        }
                    }
                    _ => push_padded(&mut out, month as i64, width),
                }
            }
        } else if token::starts_with_letter(tok, 'd') {
            match width {
                3 => out.push_str(locale.days_abbr[date.weekday()]),
                4 => out.push_str(locale.days_full[date.weekday()]),
                _ => push_padded(&mut out, date.day() as i64, width),
            }
        } else if token::starts_with_letter(tok, 'h') {
            let hour = if twelve_hour {
                (date.hour() + 11) % 12 + 1
            } else {
                date.hour()
            };
            push_padded(&mut out, hour as i64, width);
        } else if token::starts_with_letter(tok, 's') {
            push_padded(&mut out, date.second() as i64, width);
        } else if token::starts_with_letter(tok, 'g') {
            if width < 3 {
                out.push_str(locale.era_abbr);
            } else {
                out.push_str(locale.era_name);
            }
        } else if tok.eq_ignore_ascii_case("am/pm") {
            let meridiem = if date.hour() < 12 { locale.am } else { locale.pm };
            out.push_str(&meridiem.to_uppercase());
        } else if tok.eq_ignore_ascii_case("a/p") {
            let meridiem = if date.hour() < 12 { locale.am } else { locale.pm };
            if let Some(initial) = meridiem.chars().next() {
                // Single letter, cased like the token itself.
                if tok.starts_with(|c: char| c.is_uppercase()) {
                    out.extend(initial.to_uppercase());
                } else {
                    out.extend(initial.to_lowercase());
                }
            }
        } else if tok.starts_with(".0") {
            out.push('.');
            push_padded(&mut out, date.millisecond() as i64, width - 1);
        } else if tok == "/" {
            out.push(locale.date_separator);
        } else if tok == "," {
            // Runs of commas collapse to one.
            while i + 1 < tokens.len() && tokens[i + 1] == "," {
                i += 1;
            }
            out.push(',');
        } else {
            format_literal(tok, &mut out);
        }

        i += 1;
    }

    out
}

/// Zero-padded integer, sign ahead of the padding.
pub(super) fn push_padded(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:0width$}", value.unsigned_abs(), width = width));
}

fn contains_am_pm(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|t| t.eq_ignore_ascii_case("am/pm") || t.eq_ignore_ascii_case("a/p"))
}

/// Scan backwards from the token before `index` for a date part starting
/// with `letter`, skipping non-date tokens; any other date part ends the
/// search.
fn looking_back_at(tokens: &[String], index: usize, letter: char) -> bool {
    for tok in tokens[..index].iter().rev() {
        if token::starts_with_letter(tok, letter) {
            return true;
        }
        if token::is_date_part(tok) {
            return false;
        }
    }
    false
}

/// Scan forwards from `index`, same rules.
fn looking_ahead_at(tokens: &[String], index: usize, letter: char) -> bool {
    for tok in &tokens[index.min(tokens.len())..] {
        if token::starts_with_letter(tok, letter) {
            return true;
        }
        if token::is_date_part(tok) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_minute_disambiguation() {
        // After hours: minutes.
        assert!(looking_back_at(&strs(&["h", ":", "mm"]), 2, 'h'));
        // Before seconds: minutes.
        assert!(looking_ahead_at(&strs(&["mm", ":", "ss"]), 1, 's'));
        // Between day and year: month.
        let tokens = strs(&["yyyy", "-", "mm", "-", "dd"]);
        assert!(!looking_back_at(&tokens, 2, 'h'));
        assert!(!looking_ahead_at(&tokens, 3, 's'));
    }

    #[test]
    fn test_push_padded() {
        let mut out = String::new();
        push_padded(&mut out, 7, 3);
        assert_eq!(out, "007");

        let mut out = String::new();
        push_padded(&mut out, -5, 2);
        assert_eq!(out, "-05");
    }
}
