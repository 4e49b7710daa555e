//! Error types for parsing and formatting.

use thiserror::Error;

/// Errors that can occur when parsing a format pattern.
///
/// A parse error means the pattern is not usable at all; callers that want
/// spreadsheet behavior should fall back to a plain rendering of the value,
/// which is what the crate-level [`format`](crate::format) function does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unrecognized character '{found}' at position {position}")]
    UnexpectedToken { position: usize, found: char },

    #[error("section {index} mixes date, general and/or text parts")]
    MixedParts { index: usize },

    #[error("section {index} does not form a number, fraction or exponent layout")]
    UnrecognizedLayout { index: usize },
}

/// Errors that can occur when applying a parsed format to a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("no section of the format applies to this value")]
    NoMatchingSection,

    #[error("type mismatch: section expects {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("serial number {serial} is outside the representable date range")]
    DateOutOfRange { serial: f64 },
}
