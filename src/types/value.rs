use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported value types for template fields.
///
/// The variant order matters for `serde(untagged)`: JSON booleans only
/// deserialize into `Flag`, numbers into `Number`, strings into `Text`,
/// and arrays into `List`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A boolean flag.
    Flag(bool),
    /// A numeric value.
    Number(f64),
    /// A UTF-8 string.
    Text(String),
    /// A list of strings.
    List(Vec<String>),
}

impl FieldValue {
    /// Equality against a rule-domain value, which is always carried as text.
    ///
    /// `Number` compares numerically when `other` parses, `Flag` against
    /// `"true"`/`"false"`. A `List` never equals a single text value; use
    /// [`contains_item`](Self::contains_item) for membership.
    #[must_use]
    pub fn matches_text(&self, other: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == other,
            FieldValue::Number(n) => other.parse::<f64>().is_ok_and(|o| o == *n),
            FieldValue::Flag(b) => other.parse::<bool>().is_ok_and(|o| o == *b),
            FieldValue::List(_) => false,
        }
    }

    /// Containment check: substring for `Text`, element for `List`.
    /// `Number` and `Flag` contain nothing.
    #[must_use]
    pub fn contains_item(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.contains(needle),
            FieldValue::List(items) => items.iter().any(|i| i == needle),
            FieldValue::Number(_) | FieldValue::Flag(_) => false,
        }
    }

    /// Build a value from raw text, keeping the variant of `like` where the
    /// text parses into it. Used when a rule forces a field's value: a
    /// numeric field stays numeric, a flag stays a flag.
    #[must_use]
    pub fn coerced(raw: &str, like: &FieldValue) -> FieldValue {
        match like {
            FieldValue::Number(_) => raw
                .parse::<f64>()
                .map(FieldValue::Number)
                .unwrap_or_else(|_| FieldValue::Text(raw.to_owned())),
            FieldValue::Flag(_) => raw
                .parse::<bool>()
                .map(FieldValue::Flag)
                .unwrap_or_else(|_| FieldValue::Text(raw.to_owned())),
            FieldValue::List(_) => FieldValue::List(vec![raw.to_owned()]),
            FieldValue::Text(_) => FieldValue::Text(raw.to_owned()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Flag(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::List(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(v) => write!(f, "{v}"),
            FieldValue::Number(v) => {
                if v.fract() == 0.0 && v.is_finite() {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            FieldValue::Text(v) => write!(f, "\"{v}\""),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls() {
        assert_eq!(FieldValue::from(true), FieldValue::Flag(true));
        assert_eq!(FieldValue::from(42_i64), FieldValue::Number(42.0));
        assert_eq!(FieldValue::from(3.5_f64), FieldValue::Number(3.5));
        assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_owned()));
        assert_eq!(
            FieldValue::from(vec!["a".to_owned()]),
            FieldValue::List(vec!["a".to_owned()])
        );
    }

    #[test]
    fn matches_text_per_variant() {
        assert!(FieldValue::Text("tls".into()).matches_text("tls"));
        assert!(!FieldValue::Text("tls".into()).matches_text("plain"));
        assert!(FieldValue::Number(8080.0).matches_text("8080"));
        assert!(!FieldValue::Number(8080.0).matches_text("80"));
        assert!(FieldValue::Flag(true).matches_text("true"));
        assert!(!FieldValue::Flag(false).matches_text("true"));
        assert!(!FieldValue::List(vec!["a".into()]).matches_text("a"));
    }

    #[test]
    fn contains_item_per_variant() {
        assert!(FieldValue::Text("abcdef".into()).contains_item("cde"));
        assert!(FieldValue::List(vec!["a".into(), "b".into()]).contains_item("b"));
        assert!(!FieldValue::List(vec!["ab".into()]).contains_item("a"));
        assert!(!FieldValue::Number(1.0).contains_item("1"));
        assert!(!FieldValue::Flag(true).contains_item("true"));
    }

    #[test]
    fn coerced_keeps_variant() {
        let n = FieldValue::Number(1.0);
        assert_eq!(FieldValue::coerced("42", &n), FieldValue::Number(42.0));
        assert_eq!(
            FieldValue::coerced("nope", &n),
            FieldValue::Text("nope".to_owned())
        );
        let b = FieldValue::Flag(false);
        assert_eq!(FieldValue::coerced("true", &b), FieldValue::Flag(true));
        let l = FieldValue::List(vec![]);
        assert_eq!(
            FieldValue::coerced("x", &l),
            FieldValue::List(vec!["x".to_owned()])
        );
    }

    #[test]
    fn display() {
        assert_eq!(FieldValue::Flag(true).to_string(), "true");
        assert_eq!(FieldValue::Number(42.0).to_string(), "42");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Text("hi".into()).to_string(), "\"hi\"");
        assert_eq!(
            FieldValue::List(vec!["a".into(), "b".into()]).to_string(),
            "[a, b]"
        );
    }

    #[test]
    fn serde_untagged_round_trip() {
        let cases = [
            (FieldValue::Flag(true), "true"),
            (FieldValue::Number(8080.5), "8080.5"),
            (FieldValue::Text("x".into()), "\"x\""),
            (FieldValue::List(vec!["a".into()]), "[\"a\"]"),
        ];
        for (value, json) in cases {
            let encoded = serde_json::to_string(&value).unwrap();
            assert_eq!(encoded, json);
            let decoded: FieldValue = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, value);
        }
    }
}
