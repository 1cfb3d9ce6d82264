use thiserror::Error;

/// Errors from flattening a ruleset's inheritance chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("ruleset {index} not found (valid range: 0-{})", count.saturating_sub(1))]
    RuleSetNotFound { index: usize, count: usize },

    #[error("ruleset '{rule_set}' extends unknown ruleset '{parent}'")]
    MissingParent { rule_set: String, parent: String },

    #[error("circular ruleset inheritance: {}", path.join(" -> "))]
    CircularInheritance { path: Vec<String> },
}

/// Precondition failures of the rule transformations. The transformer never
/// mutates its inputs, so any of these leaves the caller's rule list intact.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("rule without conditions has no contrapositive")]
    NoConditions,

    #[error("at least two rules are required to merge (got {supplied})")]
    TooFewRules { supplied: usize },

    #[error("duplicate rule number {number} in merge request")]
    DuplicateRuleNumber { number: usize },

    #[error("Rule {number} not found (valid range: 1-{count})")]
    RuleNotFound { number: usize, count: usize },

    #[error("cannot merge rules with different conditions (rule {first} and rule {second})")]
    DifferentConditions { first: usize, second: usize },

    #[error("conflicting targets for field '{field}': {first} vs {second}")]
    ConflictingTargets {
        field: String,
        first: String,
        second: String,
    },
}
