use std::fmt;

use serde::{Deserialize, Serialize};

/// What a [`RuleDomain`] asserts (as a condition) or prescribes (as a target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainState {
    /// The field is checked/enabled.
    Set,
    /// The field's value equals the domain's `value`.
    SetToValue,
    /// The field's (string or list) value contains the domain's `value`.
    Contains,
}

/// A named field predicate or prescription.
///
/// Inside `conditions` it is evaluated against the field's current state;
/// inside `targets` it describes the state to force when the rule fires.
/// `not: true` negates the predicate, and as a target forces the field off.
/// The `name` is a dot path and addresses the field itself plus every
/// descendant under `name.`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDomain {
    pub name: String,
    pub state: DomainState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub not: bool,
}

impl RuleDomain {
    /// A `Set` domain: the field is checked (condition) or forced on (target).
    pub fn set(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DomainState::Set,
            value: None,
            not: false,
        }
    }

    /// A `SetToValue` domain carrying the expected/forced value.
    pub fn set_to_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DomainState::SetToValue,
            value: Some(value.into()),
            not: false,
        }
    }

    /// A `Contains` domain carrying the expected element/substring.
    pub fn contains(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DomainState::Contains,
            value: Some(value.into()),
            not: false,
        }
    }

    /// The same domain with its predicate negated.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.not = !self.not;
        self
    }

    /// Target phrasing, used in merge-conflict messages and rule rendering.
    #[must_use]
    pub fn describe_target(&self) -> String {
        let value = self.value.as_deref().unwrap_or_default();
        match (self.state, self.not) {
            (DomainState::Set, false) => format!("set '{}'", self.name),
            (DomainState::Set, true) => format!("unset '{}'", self.name),
            (DomainState::SetToValue | DomainState::Contains, false) => {
                format!("set '{}' to \"{value}\"", self.name)
            }
            (DomainState::SetToValue | DomainState::Contains, true) => {
                format!("unset '{}' (was \"{value}\")", self.name)
            }
        }
    }
}

/// Condition phrasing.
impl fmt::Display for RuleDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or_default();
        match (self.state, self.not) {
            (DomainState::Set, false) => write!(f, "'{}' is set", self.name),
            (DomainState::Set, true) => write!(f, "'{}' is not set", self.name),
            (DomainState::SetToValue, false) => write!(f, "'{}' equals \"{value}\"", self.name),
            (DomainState::SetToValue, true) => {
                write!(f, "'{}' does not equal \"{value}\"", self.name)
            }
            (DomainState::Contains, false) => write!(f, "'{}' contains \"{value}\"", self.name),
            (DomainState::Contains, true) => {
                write!(f, "'{}' does not contain \"{value}\"", self.name)
            }
        }
    }
}

/// A declarative rule: when every condition holds (conjunction), force every
/// target. No conditions means the rule always applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RuleDomain>,
    pub targets: Vec<RuleDomain>,
}

impl Rule {
    pub fn new(conditions: Vec<RuleDomain>, targets: Vec<RuleDomain>) -> Self {
        Self {
            description: None,
            conditions,
            targets,
        }
    }

    /// A rule that fires unconditionally.
    pub fn unconditional(targets: Vec<RuleDomain>) -> Self {
        Self::new(Vec::new(), targets)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Order-independent condition-set key: sorted, deduplicated
/// `(name, state, not, value)` tuples. Two rules with equal keys fire in
/// exactly the same situations.
pub(crate) fn normalized_conditions(
    rule: &Rule,
) -> Vec<(String, DomainState, bool, Option<String>)> {
    let mut key: Vec<_> = rule
        .conditions
        .iter()
        .map(|c| (c.name.clone(), c.state, c.not, c.value.clone()))
        .collect();
    key.sort();
    key.dedup();
    key
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets = self
            .targets
            .iter()
            .map(RuleDomain::describe_target)
            .collect::<Vec<_>>()
            .join(" and ");
        if self.conditions.is_empty() {
            write!(f, "always {targets}")
        } else {
            let conditions = self
                .conditions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" and ");
            write!(f, "when {conditions}, {targets}")
        }
    }
}
