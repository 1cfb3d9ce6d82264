use winnow::ascii::dec_int;
use winnow::combinator::{alt, delimited, opt, separated_pair};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use super::{ParsedRange, ScalarKind};

// -- Bounds -----------------------------------------------------------------

fn bound(input: &mut &str) -> ModalResult<Option<i64>> {
    opt(dec_int::<_, i64, _>).parse_next(input)
}

/// `min..max` with either side optionally empty.
fn bounds(input: &mut &str) -> ModalResult<(Option<i64>, Option<i64>)> {
    separated_pair(bound, "..", bound).parse_next(input)
}

// -- Type keywords ----------------------------------------------------------

/// Keywords accepted in the bounded forms. `number` aliases `integer`.
fn bounded_kind(input: &mut &str) -> ModalResult<ScalarKind> {
    alt((
        "string".value(ScalarKind::String),
        "integer".value(ScalarKind::Integer),
        "number".value(ScalarKind::Integer),
    ))
    .parse_next(input)
}

// -- Range forms ------------------------------------------------------------

/// `TYPE(min..max)`, e.g. `integer(1..100)` or `string(..32)`.
pub(super) fn bounded_scalar(input: &mut &str) -> ModalResult<ParsedRange> {
    (bounded_kind, delimited('(', bounds, ')'))
        .map(|(kind, (min, max))| ParsedRange::Scalar { kind, min, max })
        .parse_next(input)
}

/// `string[]` / `integer[]`: an unbounded array of the item type.
pub(super) fn unbounded_array(input: &mut &str) -> ModalResult<ParsedRange> {
    (
        alt((
            "string".value(ScalarKind::String),
            "integer".value(ScalarKind::Integer),
        )),
        "[]",
    )
        .map(|(item, _)| ParsedRange::Array {
            item,
            min: None,
            max: None,
        })
        .parse_next(input)
}

/// `TYPE[min..max]`: an array with element-count bounds.
pub(super) fn bounded_array(input: &mut &str) -> ModalResult<ParsedRange> {
    (bounded_kind, delimited('[', bounds, ']'))
        .map(|(item, (min, max))| ParsedRange::Array { item, min, max })
        .parse_next(input)
}

/// `(opt1||opt2)[min..max]`: a bounded array drawn from fixed options.
/// Options may alternatively be separated by `" / "`.
pub(super) fn enum_array(input: &mut &str) -> ModalResult<ParsedRange> {
    (
        delimited('(', take_while(1.., |c: char| c != ')'), ')'),
        delimited('[', bounds, ']'),
    )
        .map(|(raw, (min, max))| ParsedRange::EnumArray {
            options: split_options(raw),
            min,
            max,
        })
        .parse_next(input)
}

/// Split an option list on `||`, falling back to the legacy `" / "` separator.
pub(super) fn split_options(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains("||") {
        raw.split("||").collect()
    } else {
        raw.split(" / ").collect()
    };
    parts.into_iter().map(|p| p.trim().to_owned()).collect()
}
