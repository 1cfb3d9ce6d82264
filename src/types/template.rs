use serde::{Deserialize, Serialize};

use super::field::Field;
use super::ruleset::RuleSet;

/// A complete configuration template: fields plus the rulesets governing them.
///
/// Serializes to the camelCase JSON shape used at the persistence boundary.
/// Every template carries at least one ruleset; legacy documents with a flat
/// `rules` array are migrated by [`migrate_legacy`](crate::migrate_legacy)
/// before they reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub rule_sets: Vec<RuleSet>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: String::new(),
            version: String::new(),
            fields: Vec::new(),
            rule_sets: vec![RuleSet::new(RuleSet::DEFAULT_NAME)],
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_rule_sets(mut self, rule_sets: Vec<RuleSet>) -> Self {
        self.rule_sets = rule_sets;
        self
    }

    /// Case-sensitive ruleset lookup, used by `extends` resolution.
    #[must_use]
    pub fn find_rule_set(&self, name: &str) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|rs| rs.name == name)
    }

    /// Position of a ruleset by exact name.
    #[must_use]
    pub fn rule_set_index(&self, name: &str) -> Option<usize> {
        self.rule_sets.iter().position(|rs| rs.name == name)
    }

    /// Field lookup by exact path.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
