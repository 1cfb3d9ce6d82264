//! The validation-range mini-language.
//!
//! A field's `range` string describes the values it accepts, e.g.
//! `integer(1..65535)`, `string[1..3]`, `a||b||c`, or a bare regex. The
//! grammar is matched in a fixed priority order, first match wins:
//!
//! 1. bare keyword (`string`, `boolean`, `integer`, `url`)
//! 2. `TYPE(min..max)` bounded scalar (`number` aliases `integer`)
//! 3. `string[]` / `integer[]` unbounded array
//! 4. `TYPE[min..max]` bounded array
//! 5. `(a||b)[min..max]` bounded enum-array (`" / "` also separates)
//! 6. `||` enum
//! 7. `" / "` legacy enum
//! 8. anything else is a regular-expression pattern

mod grammar;

use regex::Regex;
use winnow::Parser;

use crate::types::{Field, FieldValue};

/// Scalar type keywords of the range DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Boolean,
    Url,
}

/// Structured form of a range string. Bounds are inclusive; `None` means
/// unbounded on that side. For `Scalar` strings the bounds constrain length,
/// for integers the value, for arrays the element count.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRange {
    Scalar {
        kind: ScalarKind,
        min: Option<i64>,
        max: Option<i64>,
    },
    Array {
        item: ScalarKind,
        min: Option<i64>,
        max: Option<i64>,
    },
    Enum {
        options: Vec<String>,
    },
    EnumArray {
        options: Vec<String>,
        min: Option<i64>,
        max: Option<i64>,
    },
    Pattern {
        pattern: String,
    },
}

/// Parse a range DSL string. Never fails: anything the structured grammar
/// does not claim is a regex pattern.
#[must_use]
pub fn parse_range(range: &str) -> ParsedRange {
    let range = range.trim();

    let bare = match range {
        "string" => Some(ScalarKind::String),
        "boolean" => Some(ScalarKind::Boolean),
        "integer" => Some(ScalarKind::Integer),
        "url" => Some(ScalarKind::Url),
        _ => None,
    };
    if let Some(kind) = bare {
        return ParsedRange::Scalar {
            kind,
            min: None,
            max: None,
        };
    }

    if let Ok(parsed) = grammar::bounded_scalar.parse(range) {
        return parsed;
    }
    if let Ok(parsed) = grammar::unbounded_array.parse(range) {
        return parsed;
    }
    if let Ok(parsed) = grammar::bounded_array.parse(range) {
        return parsed;
    }
    if let Ok(parsed) = grammar::enum_array.parse(range) {
        return parsed;
    }

    if range.contains("||") || range.contains(" / ") {
        return ParsedRange::Enum {
            options: grammar::split_options(range),
        };
    }

    ParsedRange::Pattern {
        pattern: range.to_owned(),
    }
}

/// Evaluate a field value against a parsed range.
#[must_use]
pub fn validate_value(value: &FieldValue, range: &ParsedRange) -> bool {
    match range {
        ParsedRange::Scalar { kind, min, max } => validate_scalar(value, *kind, *min, *max),
        ParsedRange::Array { item, min, max } => match value {
            FieldValue::List(items) => {
                within(items.len() as i64, *min, *max)
                    && items.iter().all(|i| item_valid(i, *item))
            }
            _ => false,
        },
        ParsedRange::Enum { options } => match value {
            FieldValue::Text(s) => options.iter().any(|o| o == s),
            _ => false,
        },
        ParsedRange::EnumArray { options, min, max } => match value {
            FieldValue::List(items) => {
                within(items.len() as i64, *min, *max)
                    && items.iter().all(|i| options.contains(i))
            }
            _ => false,
        },
        ParsedRange::Pattern { pattern } => {
            let text = match value {
                FieldValue::Text(s) => s.clone(),
                FieldValue::Number(_) | FieldValue::Flag(_) => value.to_string(),
                FieldValue::List(_) => return false,
            };
            // An uncompilable pattern validates nothing.
            Regex::new(pattern).is_ok_and(|re| re.is_match(&text))
        }
    }
}

/// Validate a field against its own range. A field without a range accepts
/// any value.
#[must_use]
pub fn validate_field(field: &Field) -> bool {
    match field.range.as_deref() {
        Some(range) => validate_value(&field.value, &parse_range(range)),
        None => true,
    }
}

fn validate_scalar(
    value: &FieldValue,
    kind: ScalarKind,
    min: Option<i64>,
    max: Option<i64>,
) -> bool {
    match (kind, value) {
        (ScalarKind::String, FieldValue::Text(s)) => within(s.chars().count() as i64, min, max),
        (ScalarKind::Integer, FieldValue::Number(n)) => {
            n.fract() == 0.0 && n.is_finite() && within(*n as i64, min, max)
        }
        (ScalarKind::Boolean, FieldValue::Flag(_)) => true,
        (ScalarKind::Url, FieldValue::Text(s)) => is_url(s),
        _ => false,
    }
}

fn item_valid(item: &str, kind: ScalarKind) -> bool {
    match kind {
        ScalarKind::Integer => item.parse::<i64>().is_ok(),
        _ => true,
    }
}

fn within(n: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
}

fn is_url(s: &str) -> bool {
    // scheme://non-empty-remainder, no whitespace
    match s.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && !rest.is_empty()
                && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}
