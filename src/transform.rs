use std::collections::HashSet;

use crate::types::{normalized_conditions, Rule, RuleDomain, RuleSet, TransformError};

/// The logically equivalent rule obtained by swapping a rule's conditions
/// and targets and negating both sides. `state` and `value` are carried
/// through unchanged; a present description gains a `"Contrapositive: "`
/// prefix. Negation is pure boolean flip, so applying the transform twice
/// restores the original `not` flags exactly.
///
/// # Errors
///
/// A rule without conditions has no contrapositive.
pub fn contrapositive(rule: &Rule) -> Result<Rule, TransformError> {
    if rule.conditions.is_empty() {
        return Err(TransformError::NoConditions);
    }
    Ok(Rule {
        description: rule
            .description
            .as_ref()
            .map(|d| format!("Contrapositive: {d}")),
        conditions: rule.targets.iter().cloned().map(RuleDomain::negated).collect(),
        targets: rule
            .conditions
            .iter()
            .cloned()
            .map(RuleDomain::negated)
            .collect(),
    })
}

/// Merge the 1-based `rule_numbers` of `rule_set` into a single rule.
///
/// All referenced rules must have identical condition sets (compared
/// order-independently). Targets are unioned by field name: exact
/// duplicates collapse silently, any discrepancy in state, `not` flag, or
/// value is a hard error naming the field and both prescriptions. The
/// merged rule takes the position of the earliest source rule; the other
/// sources are removed. When `new_description` is absent, the source
/// descriptions are joined with `" + "`.
///
/// Returns a new ruleset; the input is left untouched, so a caller can
/// validate the candidate and discard it on failure.
///
/// # Errors
///
/// Fewer than two (or duplicate) rule numbers, a number out of range,
/// differing condition sets, or conflicting targets.
pub fn merge_rules(
    rule_set: &RuleSet,
    rule_numbers: &[usize],
    new_description: Option<&str>,
) -> Result<RuleSet, TransformError> {
    if rule_numbers.len() < 2 {
        return Err(TransformError::TooFewRules {
            supplied: rule_numbers.len(),
        });
    }
    let mut seen = HashSet::new();
    for &number in rule_numbers {
        if !seen.insert(number) {
            return Err(TransformError::DuplicateRuleNumber { number });
        }
    }
    let count = rule_set.rules.len();
    for &number in rule_numbers {
        if number == 0 || number > count {
            return Err(TransformError::RuleNotFound { number, count });
        }
    }

    let mut indices: Vec<usize> = rule_numbers.iter().map(|n| n - 1).collect();
    indices.sort_unstable();
    let first = indices[0];

    let base_key = normalized_conditions(&rule_set.rules[first]);
    for &idx in &indices[1..] {
        if normalized_conditions(&rule_set.rules[idx]) != base_key {
            return Err(TransformError::DifferentConditions {
                first: first + 1,
                second: idx + 1,
            });
        }
    }

    let mut targets: Vec<RuleDomain> = Vec::new();
    for &idx in &indices {
        for target in &rule_set.rules[idx].targets {
            match targets.iter().find(|t| t.name == target.name) {
                None => targets.push(target.clone()),
                Some(existing) if existing == target => {}
                Some(existing) => {
                    return Err(TransformError::ConflictingTargets {
                        field: target.name.clone(),
                        first: existing.describe_target(),
                        second: target.describe_target(),
                    });
                }
            }
        }
    }

    let description = match new_description {
        Some(d) => Some(d.to_owned()),
        None => {
            let joined: Vec<&str> = indices
                .iter()
                .filter_map(|&idx| rule_set.rules[idx].description.as_deref())
                .collect();
            if joined.is_empty() {
                None
            } else {
                Some(joined.join(" + "))
            }
        }
    };

    let merged = Rule {
        description,
        conditions: rule_set.rules[first].conditions.clone(),
        targets,
    };

    let mut rules = rule_set.rules.clone();
    for &idx in indices.iter().rev() {
        rules.remove(idx);
    }
    rules.insert(first, merged);

    let mut out = rule_set.clone();
    out.rules = rules;
    Ok(out)
}
