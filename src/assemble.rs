use serde::Deserialize;

use crate::error::EngineError;
use crate::types::{Field, Rule, RuleSet, Template};

/// Merge `incoming` into `base`, producing a new template. Used by the
/// import and registry-merge flows.
///
/// Fields merge by exact name and the base wins collisions, so an import
/// never clobbers user edits. Rulesets merge by case-insensitive name:
/// same-named rulesets concatenate their rules (exact duplicates dropped)
/// and union their tags; unmatched rulesets are appended.
#[must_use]
pub fn merge_templates(base: &Template, incoming: &Template) -> Template {
    let mut merged = base.clone();

    for field in &incoming.fields {
        if merged.field(&field.name).is_none() {
            merged.fields.push(field.clone());
        }
    }

    for rule_set in &incoming.rule_sets {
        match merged
            .rule_sets
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&rule_set.name))
        {
            Some(existing) => {
                for rule in &rule_set.rules {
                    if !existing.rules.contains(rule) {
                        existing.rules.push(rule.clone());
                    }
                }
                for tag in &rule_set.tags {
                    if !existing.tags.contains(tag) {
                        existing.tags.push(tag.clone());
                    }
                }
            }
            None => merged.rule_sets.push(rule_set.clone()),
        }
    }

    merged
}

/// Raw document shape accepted by [`migrate_legacy`]: either the current
/// `ruleSets` layout or the legacy flat `rules` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTemplate {
    name: String,
    #[serde(default)]
    file_name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    rule_sets: Vec<RuleSet>,
    #[serde(default)]
    rules: Vec<Rule>,
}

/// Parse template JSON, migrating the legacy format (flat `rules` array,
/// no `ruleSets`) into a single `Default` ruleset. Modern documents pass
/// through unchanged. The result always has at least one ruleset.
///
/// # Errors
///
/// Returns the underlying `serde_json` error on malformed input.
pub fn migrate_legacy(json: &str) -> Result<Template, EngineError> {
    let raw: RawTemplate = serde_json::from_str(json)?;
    let rule_sets = if raw.rule_sets.is_empty() {
        vec![RuleSet::new(RuleSet::DEFAULT_NAME).with_rules(raw.rules)]
    } else {
        raw.rule_sets
    };
    Ok(Template {
        name: raw.name,
        file_name: raw.file_name,
        version: raw.version,
        fields: raw.fields,
        rule_sets,
    })
}

/// Remove the field named `name` from a template. With `cascade`, every
/// rule in every ruleset that references the field (as condition or
/// target) is dropped as well; without it, rules are left as-is for the
/// caller to repair.
#[must_use]
pub fn remove_field(template: &Template, name: &str, cascade: bool) -> Template {
    let mut out = template.clone();
    out.fields.retain(|f| f.name != name);
    if cascade {
        for rule_set in &mut out.rule_sets {
            rule_set.rules.retain(|rule| {
                !rule
                    .conditions
                    .iter()
                    .chain(&rule.targets)
                    .any(|domain| domain.name == name)
            });
        }
    }
    out
}
