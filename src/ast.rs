//! Parsed representation of a format pattern.

use crate::error::ParseError;
use std::str::FromStr;

/// Comparison operator of a bracketed condition like `[>=100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    NotEqual,
    Equal,
}

/// Conditional expression guarding a section.
///
/// Only the first two sections of a pattern carry conditions; later
/// sections are selected positionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub op: CompareOp,
    pub value: f64,
}

impl Condition {
    /// Evaluate this condition against a numeric value.
    pub fn evaluate(&self, lhs: f64) -> bool {
        match self.op {
            CompareOp::LessThan => lhs < self.value,
            CompareOp::LessOrEqual => lhs <= self.value,
            CompareOp::GreaterThan => lhs > self.value,
            CompareOp::GreaterOrEqual => lhs >= self.value,
            CompareOp::NotEqual => lhs != self.value,
            CompareOp::Equal => lhs == self.value,
        }
    }
}

/// Named colors recognized in a `[Red]`-style directive.
///
/// Recognized and recorded on the section, but never applied to the output
/// text; indexed `Color1..Color59` directives are not supported and are
/// dropped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl FromStr for NamedColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(NamedColor::Black),
            "blue" => Ok(NamedColor::Blue),
            "cyan" => Ok(NamedColor::Cyan),
            "green" => Ok(NamedColor::Green),
            "magenta" => Ok(NamedColor::Magenta),
            "red" => Ok(NamedColor::Red),
            "white" => Ok(NamedColor::White),
            "yellow" => Ok(NamedColor::Yellow),
            _ => Err(()),
        }
    }
}

/// Layout of a plain decimal section like `#,##0.00`.
///
/// The integer and fractional sides keep their tokens in pattern order,
/// literals included, so the formatter can interleave text with digits.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalLayout {
    /// Tokens before the decimal point (placeholders and literals).
    pub before_decimal: Vec<String>,
    /// Whether a decimal point is rendered at all.
    pub decimal_point: bool,
    /// Tokens after the decimal point.
    pub after_decimal: Vec<String>,
    /// Emit a group separator every three integer digits.
    pub group_digits: bool,
    /// Power of 1000 to divide by, one factor per comma trailing the last
    /// placeholder (the `#,##0,` "show in thousands" idiom).
    pub scale_divisor: f64,
    /// 100 if the section contains a `%` literal, otherwise 1.
    pub percent_multiplier: f64,
}

/// Layout of a scientific-notation section like `0.00E+00`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialLayout {
    /// Mantissa tokens before the decimal point.
    pub before_decimal: Vec<String>,
    /// Whether the mantissa renders a decimal point.
    pub decimal_point: bool,
    /// Mantissa tokens after the decimal point.
    pub after_decimal: Vec<String>,
    /// The exponent marker as written (`E+`, `e-`, ...); its case and sign
    /// control how the exponent is displayed.
    pub marker: String,
    /// Placeholder tokens for the exponent digits.
    pub power: Vec<String>,
}

/// Layout of a fraction section like `# ??/??` or `0/8`.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionLayout {
    /// Tokens of the whole-number part, when the pattern has one
    /// (mixed-number forms like `# ?/?`).
    pub integer_part: Option<Vec<String>>,
    /// Numerator tokens.
    pub numerator: Vec<String>,
    /// Literal tokens between the slash and the denominator digits.
    pub denominator_prefix: Option<Vec<String>>,
    /// Denominator placeholder tokens (empty when a constant is used).
    pub denominator: Vec<String>,
    /// Fixed denominator when the pattern spells out digits (`?/8`).
    pub denominator_constant: Option<i64>,
    /// Tokens between the denominator and the trailing literal run.
    pub denominator_suffix: Option<Vec<String>>,
    /// Trailing literal run after the denominator.
    pub fraction_suffix: Option<Vec<String>>,
}

/// The family of a section together with its structured layout.
///
/// Exactly one layout exists per section; families that render token by
/// token (dates, durations, general and text) carry the token stream
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionKind {
    Number(DecimalLayout),
    Fraction(FractionLayout),
    Exponential(ExponentialLayout),
    Date(Vec<String>),
    Duration(Vec<String>),
    General(Vec<String>),
    Text(Vec<String>),
}

/// A single semicolon-delimited section of a format pattern.
///
/// Patterns can have up to 4 sections, conventionally:
/// 1. Positive numbers (or all numbers if only one section)
/// 2. Negative numbers
/// 3. Zero
/// 4. Text
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Zero-based position of this section in the pattern.
    pub index: usize,
    /// Optional condition (e.g. `[>100]`).
    pub condition: Option<Condition>,
    /// Optional color directive (e.g. `[Red]`).
    pub color: Option<NamedColor>,
    /// The section family and its layout.
    pub kind: SectionKind,
}

/// A parsed number format pattern.
///
/// Parsing is pure; a `NumberFormat` can be kept around and used to format
/// any number of values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    sections: Vec<Section>,
}

impl NumberFormat {
    /// Parse a format pattern.
    pub fn parse(pattern: &str) -> Result<NumberFormat, ParseError> {
        crate::parser::parse(pattern).map(|sections| NumberFormat { sections })
    }

    /// The sections of this format, in pattern order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_evaluate() {
        let gt = Condition {
            op: CompareOp::GreaterThan,
            value: 100.0,
        };
        assert!(gt.evaluate(150.0));
        assert!(!gt.evaluate(100.0));

        let ne = Condition {
            op: CompareOp::NotEqual,
            value: 0.0,
        };
        assert!(ne.evaluate(-1.0));
        assert!(!ne.evaluate(0.0));
    }

    #[test]
    fn test_named_color_from_str() {
        assert_eq!("Red".parse::<NamedColor>(), Ok(NamedColor::Red));
        assert_eq!("MAGENTA".parse::<NamedColor>(), Ok(NamedColor::Magenta));
        assert!("Color3".parse::<NamedColor>().is_err());
    }
}
