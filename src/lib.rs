//! cellfmt - spreadsheet cell display strings from ECMA-376 number format
//! patterns.
//!
//! This crate interprets the number-format mini-language spreadsheet cells
//! use (`#,##0.00;(#,##0.00);"-";@`) and renders numbers, dates, elapsed
//! times and text exactly as a spreadsheet application would display them,
//! including the historical quirks: the 1900 leap-year bug, AM/PM hour
//! wrapping, thousands-scaling commas and fraction reduction.
//!
//! Formatting never fails. A malformed pattern, or a value the pattern
//! cannot render, degrades to a plain locale-aware rendering of the value,
//! because a bad format string must never break a cell.
//!
//! ```
//! use cellfmt::{format, FormatOptions};
//!
//! let opts = FormatOptions::default();
//! assert_eq!(format(1234567.0, "#,##0", &opts), "1,234,567");
//! assert_eq!(format(0.5, "0%", &opts), "50%");
//! assert_eq!(format(1.5, "# ?/?", &opts), "1 1/2");
//! assert_eq!(format(60.0, "yyyy-mm-dd", &opts), "1900-02-29");
//! ```
//!
//! Known limitation: the `*x` fill directive renders its character once
//! instead of repeating it to the cell width, which this crate cannot know.

pub mod ast;
pub mod date_serial;
pub mod error;
pub mod locale;
pub mod options;
pub mod value;

mod cache;
mod evaluator;
mod formatter;
pub mod parser;

pub use ast::{
    CompareOp, Condition, DecimalLayout, ExponentialLayout, FractionLayout, NamedColor,
    NumberFormat, Section, SectionKind,
};
pub use error::{FormatError, ParseError};
pub use locale::Locale;
pub use options::{DateSystem, FormatOptions};
pub use value::Value;

/// Format a value with a number format pattern.
///
/// One-shot convenience over [`NumberFormat::parse`] +
/// [`NumberFormat::format`], with the parsed pattern cached across calls.
/// Never fails: unusable patterns and unrenderable values fall back to a
/// plain rendering of the value.
pub fn format<'a>(value: impl Into<Value<'a>>, pattern: &str, opts: &FormatOptions) -> String {
    let value = value.into();
    match cache::get_or_parse(pattern) {
        Ok(parsed) => parsed.format(value, opts),
        Err(_) => formatter::compatible_string(&value, &opts.locale),
    }
}
