//! Escaping of option values.
//!
//! ffmpeg separates filters with unescaped commas, so an option value holding
//! an expression like `between(t, 10, 20)` would be split into several
//! filters. Values that look like a function call with two or more arguments
//! get their commas escaped. This is a shape test, not an expression parser:
//! text that merely looks like such a call is escaped as well.

use crate::core::types::FilterOptionValue;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// A word followed by a parenthesised list of at least two arguments made of
/// word characters and whitespace. `\w` is restricted to ASCII here.
static FILTER_FUNCTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9A-Za-z_]+\(([0-9A-Za-z_\s]+,)+[0-9A-Za-z_\s]+\)")
        .expect("failed to compile FILTER_FUNCTION_REGEX")
});

/// A comma together with any whitespace around it.
static COMMA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("failed to compile COMMA_REGEX"));

const ESCAPED_COMMA: &str = r"\, ";

/// Whether `text` contains a multi-argument function call.
pub fn is_function_call(text: &str) -> bool {
    FILTER_FUNCTION_REGEX.is_match(text)
}

/// Escape every comma in `text` as `\, `, swallowing surrounding whitespace.
pub fn escape_commas(text: &str) -> String {
    COMMA_REGEX.replace_all(text, NoExpand(ESCAPED_COMMA)).into_owned()
}

/// Format an option value for use in a filter-graph expression.
///
/// Numbers print in plain decimal form. Text passes through unchanged unless
/// it contains a multi-argument function call, in which case all of its commas
/// are escaped.
pub fn format_option_value(value: &FilterOptionValue) -> String {
    match value {
        FilterOptionValue::Text(text) if is_function_call(text) => {
            log::trace!("Escaping commas in option value {:?}", text);
            escape_commas(text)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FilterOptionValue {
        FilterOptionValue::from(s)
    }

    #[test]
    fn test_between_is_escaped() {
        assert_eq!(
            format_option_value(&text("between(t, 10, 20)")),
            r"between(t\, 10\, 20)"
        );
    }

    #[test]
    fn test_whitespace_around_commas_is_normalized() {
        assert_eq!(
            format_option_value(&text("between(t,10 ,  20)")),
            r"between(t\, 10\, 20)"
        );
    }

    #[test]
    fn test_single_argument_call_is_untouched() {
        assert!(!is_function_call("sin(t)"));
        assert_eq!(format_option_value(&text("sin(t)")), "sin(t)");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        for value in ["PTS-STARTPTS", "iw/2", "lanczos", "a, b", "", "x(1.5, 2)"] {
            assert_eq!(format_option_value(&text(value)), value);
        }
    }

    #[test]
    fn test_every_comma_is_escaped_once_matched() {
        // The comma outside the call is escaped too.
        assert_eq!(
            format_option_value(&text("gt(n, 5), 1")),
            r"gt(n\, 5)\, 1"
        );
    }

    #[test]
    fn test_call_inside_larger_expression() {
        assert_eq!(
            format_option_value(&text("eq(pict_type,I)")),
            r"eq(pict_type\, I)"
        );
        assert_eq!(
            format_option_value(&text("not(mod(n,10))")),
            r"not(mod(n\, 10))"
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(format_option_value(&FilterOptionValue::Integer(10)), "10");
        assert_eq!(format_option_value(&FilterOptionValue::Float(10.0)), "10");
        assert_eq!(format_option_value(&FilterOptionValue::Float(2.5)), "2.5");
    }
}
