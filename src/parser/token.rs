//! Token classification predicates.
//!
//! Tokens keep their original spelling, so classification is by content:
//! a one-character token is a placeholder or punctuation, a letter run is a
//! date part, a bracketed run of `h`/`m`/`s` is an elapsed-time part, and
//! so on. Every predicate is a pure function over the token text.

/// `0`, `#` or `?`: a digit position.
pub fn is_placeholder(token: &str) -> bool {
    matches!(token, "0" | "#" | "?")
}

/// A token that renders as literal text inside a numeric layout.
pub fn is_literal(token: &str) -> bool {
    token.starts_with('_')
        || token.starts_with('\\')
        || token.starts_with('"')
        || token.starts_with('*')
        || matches!(
            token,
            "," | "!"
                | "&"
                | "%"
                | "+"
                | "-"
                | "$"
                | "€"
                | "£"
                | "1"
                | "2"
                | "3"
                | "4"
                | "5"
                | "6"
                | "7"
                | "8"
                | "9"
                | "{"
                | "}"
                | "("
                | ")"
                | " "
        )
}

/// A token that may appear inside a decimal number layout.
pub fn is_number_literal(token: &str) -> bool {
    is_placeholder(token) || is_literal(token) || token == "."
}

/// The `General` keyword, any case.
pub fn is_general(token: &str) -> bool {
    token.eq_ignore_ascii_case("general")
}

/// An `e+`/`e-` exponent marker, any case.
pub fn is_exponent(token: &str) -> bool {
    token.eq_ignore_ascii_case("e+") || token.eq_ignore_ascii_case("e-")
}

/// Any date or time token, elapsed-time brackets included.
pub fn is_date_part(token: &str) -> bool {
    starts_with_letter(token, 'y')
        || starts_with_letter(token, 'm')
        || starts_with_letter(token, 'd')
        || starts_with_letter(token, 's')
        || starts_with_letter(token, 'h')
        || (starts_with_letter(token, 'g') && !is_general(token))
        || token.eq_ignore_ascii_case("am/pm")
        || token.eq_ignore_ascii_case("a/p")
        || is_duration_part(token)
}

/// An elapsed-time token: a bracketed same-letter run of `h`, `m` or `s`
/// (`[h]`, `[mm]`, `[sss]`).
pub fn is_duration_part(token: &str) -> bool {
    let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return false;
    };
    let mut chars = inner.chars();
    let Some(first) = chars.next().map(|c| c.to_ascii_lowercase()) else {
        return false;
    };
    matches!(first, 'h' | 'm' | 's') && chars.all(|c| c.to_ascii_lowercase() == first)
}

/// Case-insensitive first-character test.
pub fn starts_with_letter(token: &str, letter: char) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.to_ascii_lowercase() == letter)
}

/// `0`-`9` as a single-character token.
pub fn is_digit_0_9(token: &str) -> bool {
    token == "0" || is_digit_1_9(token)
}

/// `1`-`9` as a single-character token.
pub fn is_digit_1_9(token: &str) -> bool {
    matches!(
        token,
        "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9"
    )
}
