//! Section selection.
//!
//! Given the parsed sections of a pattern and a runtime value, pick the
//! section that governs the value. Selection only looks at the value's
//! category and sign; whether the chosen section can actually render the
//! value is the formatter's problem (and its failure is what triggers the
//! fallback rendering).

use crate::ast::{Section, SectionKind};
use crate::value::Value;

/// Select the section that applies to `value`, if any.
pub fn select_section<'s>(sections: &'s [Section], value: &Value) -> Option<&'s Section> {
    match value {
        // Text only ever renders through an explicit fourth section.
        Value::Text(_) => {
            if sections.len() >= 4 {
                sections.get(3)
            } else {
                None
            }
        }

        // Timestamps use the first date-typed section.
        Value::DateTime(_) => sections
            .iter()
            .find(|s| matches!(s.kind, SectionKind::Date(_))),

        // Durations select like numbers, by their length in days.
        Value::Duration(d) => {
            numeric_section(sections, d.num_milliseconds() as f64 / 86_400_000.0)
        }

        Value::Number(n) => numeric_section(sections, *n),

        // Booleans never match; they take the fallback path.
        Value::Bool(_) => None,
    }
}

/// The numeric selection rules.
///
/// The first section applies if it has a matching condition, or if it has
/// no condition and (there is 1 section) or (2 sections and the value is
/// zero or positive) or (more sections and the value is positive). The
/// second applies if it has a matching condition, or the value is
/// negative, or there are exactly 2 sections and the first had a
/// non-matching condition. Later sections never carry conditions; the
/// third, when present, is the unconditional remainder (zero formatting).
fn numeric_section<'s>(sections: &'s [Section], value: f64) -> Option<&'s Section> {
    let first = sections.first()?;
    if let Some(condition) = &first.condition {
        if condition.evaluate(value) {
            return Some(first);
        }
    } else if sections.len() == 1
        || (sections.len() == 2 && value >= 0.0)
        || (sections.len() >= 2 && value > 0.0)
    {
        return Some(first);
    }

    let second = sections.get(1)?;
    if let Some(condition) = &second.condition {
        if condition.evaluate(value) {
            return Some(second);
        }
    } else if value < 0.0 || (sections.len() == 2 && first.condition.is_some()) {
        return Some(second);
    }

    sections.get(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NumberFormat;

    fn pick<'s>(fmt: &'s NumberFormat, value: f64) -> Option<usize> {
        select_section(fmt.sections(), &Value::Number(value)).map(|s| s.index)
    }

    #[test]
    fn test_two_sections() {
        let fmt = NumberFormat::parse("0.00;(0.00)").unwrap();
        assert_eq!(pick(&fmt, 5.0), Some(0));
        assert_eq!(pick(&fmt, 0.0), Some(0));
        assert_eq!(pick(&fmt, -5.0), Some(1));
    }

    #[test]
    fn test_three_sections_zero() {
        let fmt = NumberFormat::parse("0.00;(0.00);\"-\"").unwrap();
        assert_eq!(pick(&fmt, 5.0), Some(0));
        assert_eq!(pick(&fmt, -5.0), Some(1));
        assert_eq!(pick(&fmt, 0.0), Some(2));
    }

    #[test]
    fn test_conditions() {
        let fmt = NumberFormat::parse("[>100]0.0;[<0]-0.0;0").unwrap();
        assert_eq!(pick(&fmt, 150.0), Some(0));
        assert_eq!(pick(&fmt, -3.0), Some(1));
        assert_eq!(pick(&fmt, 50.0), Some(2));
    }

    #[test]
    fn test_two_sections_with_condition_fallthrough() {
        // With exactly two sections, a failed first condition lands on the
        // second even for positive values.
        let fmt = NumberFormat::parse("[>100]0.0;0.00").unwrap();
        assert_eq!(pick(&fmt, 50.0), Some(1));
        assert_eq!(pick(&fmt, 150.0), Some(0));
    }

    #[test]
    fn test_text_needs_fourth_section() {
        let fmt = NumberFormat::parse("0;0;0;@").unwrap();
        assert_eq!(
            select_section(fmt.sections(), &Value::Text("x")).map(|s| s.index),
            Some(3)
        );

        let fmt = NumberFormat::parse("0").unwrap();
        assert!(select_section(fmt.sections(), &Value::Text("x")).is_none());
    }

    #[test]
    fn test_bool_never_matches() {
        let fmt = NumberFormat::parse("0;0;0;@").unwrap();
        assert!(select_section(fmt.sections(), &Value::Bool(true)).is_none());
    }
}
