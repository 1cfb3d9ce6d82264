use trellis::{parse_range, ParsedRange, ScalarKind};

fn scalar(kind: ScalarKind, min: Option<i64>, max: Option<i64>) -> ParsedRange {
    ParsedRange::Scalar { kind, min, max }
}

#[test]
fn bare_keywords_parse_first() {
    assert_eq!(parse_range("string"), scalar(ScalarKind::String, None, None));
    assert_eq!(
        parse_range("boolean"),
        scalar(ScalarKind::Boolean, None, None)
    );
    assert_eq!(
        parse_range("integer"),
        scalar(ScalarKind::Integer, None, None)
    );
    assert_eq!(parse_range("url"), scalar(ScalarKind::Url, None, None));
}

#[test]
fn bare_number_is_not_a_keyword() {
    // Only string/boolean/integer/url are bare keywords; `number` alone
    // falls through to the pattern rule.
    assert_eq!(
        parse_range("number"),
        ParsedRange::Pattern {
            pattern: "number".to_owned(),
        }
    );
}

#[test]
fn bounded_scalars() {
    assert_eq!(
        parse_range("integer(1..100)"),
        scalar(ScalarKind::Integer, Some(1), Some(100))
    );
    assert_eq!(
        parse_range("number(1..100)"),
        scalar(ScalarKind::Integer, Some(1), Some(100)),
        "number aliases integer"
    );
    assert_eq!(
        parse_range("string(3..)"),
        scalar(ScalarKind::String, Some(3), None)
    );
    assert_eq!(
        parse_range("string(..10)"),
        scalar(ScalarKind::String, None, Some(10))
    );
}

#[test]
fn unbounded_arrays() {
    assert_eq!(
        parse_range("string[]"),
        ParsedRange::Array {
            item: ScalarKind::String,
            min: None,
            max: None,
        }
    );
    assert_eq!(
        parse_range("integer[]"),
        ParsedRange::Array {
            item: ScalarKind::Integer,
            min: None,
            max: None,
        }
    );
}

#[test]
fn bounded_arrays() {
    assert_eq!(
        parse_range("integer[2..5]"),
        ParsedRange::Array {
            item: ScalarKind::Integer,
            min: Some(2),
            max: Some(5),
        }
    );
}

#[test]
fn enum_array_beats_plain_enum() {
    // Contains `||` but the bracketed form takes priority.
    assert_eq!(
        parse_range("(a||b||c)[1..2]"),
        ParsedRange::EnumArray {
            options: vec!["a".into(), "b".into(), "c".into()],
            min: Some(1),
            max: Some(2),
        }
    );
}

#[test]
fn enum_array_with_legacy_separator() {
    assert_eq!(
        parse_range("(low / high)[1..1]"),
        ParsedRange::EnumArray {
            options: vec!["low".into(), "high".into()],
            min: Some(1),
            max: Some(1),
        }
    );
}

#[test]
fn plain_enums() {
    assert_eq!(
        parse_range("http||https"),
        ParsedRange::Enum {
            options: vec!["http".into(), "https".into()],
        }
    );
    assert_eq!(
        parse_range("debug / info / warn"),
        ParsedRange::Enum {
            options: vec!["debug".into(), "info".into(), "warn".into()],
        }
    );
}

#[test]
fn everything_else_is_a_pattern() {
    for raw in [r"^\d+$", "boolean[]", "integer(1..100)x", "foo(1..2)"] {
        assert_eq!(
            parse_range(raw),
            ParsedRange::Pattern {
                pattern: raw.to_owned(),
            },
            "expected pattern fallback for {raw:?}"
        );
    }
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        parse_range("  integer(1..5)  "),
        scalar(ScalarKind::Integer, Some(1), Some(5))
    );
}
