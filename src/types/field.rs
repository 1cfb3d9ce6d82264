use serde::{Deserialize, Serialize};

use super::value::FieldValue;

/// Whether the domain path `path` addresses the field named `field_name`.
///
/// A path addresses its exact field and every descendant under `path.`,
/// so a rule written against `"database"` also covers `"database.host"`.
/// This is the single hierarchy definition shared by the evaluator, the
/// validator, and the requiredness queries.
pub(crate) fn path_addresses(path: &str, field_name: &str) -> bool {
    field_name == path
        || (field_name.starts_with(path) && field_name[path.len()..].starts_with('.'))
}

/// A single named entry of a template.
///
/// `name` is a unique, dot-delimited hierarchical path. `checked` is the
/// on/off state rules act on; a rule that forces a field records a disabled
/// reason alongside, marking it read-only for the user for that cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Validation-range DSL string, parsed by [`parse_range`](crate::parse_range).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            checked: false,
            info: None,
            example: None,
            range: None,
            link: None,
        }
    }

    /// Same field, but checked. Convenient when building fixtures.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Attach a validation-range DSL string.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Whether this field is addressed by the domain path `path`
    /// (the field itself or any descendant of `path`).
    #[must_use]
    pub fn is_under(&self, path: &str) -> bool {
        path_addresses(path, &self.name)
    }
}
