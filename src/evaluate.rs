use std::collections::BTreeMap;

use crate::types::{path_addresses, DomainState, Field, FieldValue, Rule, RuleDomain};

/// Upper bound on evaluation passes. Any legitimate rule chain converges in
/// far fewer; the cap only bites when contradictory rules oscillate, in
/// which case the last completed snapshot is returned.
const MAX_PASSES: usize = 100;

/// Why a field's state changed, when the caller (not a rule) changed it.
///
/// The evaluator never invents these; pass one to
/// [`apply_rules_traced`] to have its text attached to fields the caller
/// touched and no rule claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    UserAction,
    CheckedAll,
    UncheckedAll,
}

impl Trigger {
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Trigger::UserAction => "User action",
            Trigger::CheckedAll => "Checked all fields",
            Trigger::UncheckedAll => "Unchecked all fields",
        }
    }
}

/// Result of applying a rule list to a field array.
///
/// `disabled_reasons` maps each rule-controlled field to a human-readable
/// explanation; such fields are read-only for the user for this cycle.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Evaluation {
    fields: Vec<Field>,
    disabled_reasons: BTreeMap<String, String>,
    converged: bool,
}

impl Evaluation {
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    #[must_use]
    pub fn disabled_reasons(&self) -> &BTreeMap<String, String> {
        &self.disabled_reasons
    }

    #[must_use]
    pub fn reason_for(&self, field_name: &str) -> Option<&str> {
        self.disabled_reasons.get(field_name).map(String::as_str)
    }

    /// Whether the pass loop reached a fixed point. `false` means the
    /// iteration cap cut off oscillating (contradictory) rules and
    /// [`fields`](Self::fields) is the last completed snapshot.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Apply `rules` to `fields` until the field array reaches a fixed point.
///
/// Conditions are conjunctions evaluated against the in-progress field
/// array, so a target of one rule can satisfy a condition of another within
/// the same call. Rules are visited in array order each pass; when several
/// rules force the same field, the later rule wins. Inputs are never
/// mutated.
pub fn apply_rules(fields: &[Field], rules: &[Rule]) -> Evaluation {
    apply_rules_traced(fields, rules, None, None)
}

/// [`apply_rules`], additionally attaching `trigger`'s reason to fields
/// that differ from `original` and were not forced by any rule.
pub fn apply_rules_traced(
    fields: &[Field],
    rules: &[Rule],
    trigger: Option<Trigger>,
    original: Option<&[Field]>,
) -> Evaluation {
    let mut working = fields.to_vec();
    let mut reasons = BTreeMap::new();

    let mut converged = false;
    for _ in 0..MAX_PASSES {
        let before = working.clone();
        run_pass(&mut working, rules, &mut reasons);
        if working == before {
            converged = true;
            break;
        }
    }

    if let (Some(trigger), Some(original)) = (trigger, original) {
        for field in &working {
            if reasons.contains_key(&field.name) {
                continue;
            }
            let caller_changed = original
                .iter()
                .find(|o| o.name == field.name)
                .is_none_or(|o| o.checked != field.checked || o.value != field.value);
            if caller_changed {
                reasons.insert(field.name.clone(), trigger.reason().to_owned());
            }
        }
    }

    Evaluation {
        fields: working,
        disabled_reasons: reasons,
        converged,
    }
}

/// Whether any rule in `rules` unconditionally forces the named field on.
#[must_use]
pub fn is_field_required(field_name: &str, rules: &[Rule]) -> bool {
    unconditional_target(field_name, rules, false)
}

/// Whether any rule in `rules` unconditionally forces the named field off.
#[must_use]
pub fn is_field_forbidden(field_name: &str, rules: &[Rule]) -> bool {
    unconditional_target(field_name, rules, true)
}

fn unconditional_target(field_name: &str, rules: &[Rule], not: bool) -> bool {
    rules.iter().filter(|r| r.is_unconditional()).any(|r| {
        r.targets
            .iter()
            .any(|t| t.not == not && path_addresses(&t.name, field_name))
    })
}

fn run_pass(fields: &mut [Field], rules: &[Rule], reasons: &mut BTreeMap<String, String>) {
    for rule in rules {
        if !rule_fires(rule, fields) {
            continue;
        }
        let reason = rule_reason(rule);
        for target in &rule.targets {
            for field in fields.iter_mut().filter(|f| f.is_under(&target.name)) {
                apply_target(field, target);
                reasons.insert(field.name.clone(), reason.clone());
            }
        }
    }
}

fn rule_fires(rule: &Rule, fields: &[Field]) -> bool {
    rule.conditions.iter().all(|c| condition_holds(c, fields))
}

fn condition_holds(condition: &RuleDomain, fields: &[Field]) -> bool {
    let satisfied = fields
        .iter()
        .filter(|f| f.is_under(&condition.name))
        .any(|f| domain_satisfied(condition, f));
    satisfied != condition.not
}

fn domain_satisfied(condition: &RuleDomain, field: &Field) -> bool {
    match condition.state {
        DomainState::Set => field.checked,
        DomainState::SetToValue => condition
            .value
            .as_deref()
            .is_some_and(|v| field.value.matches_text(v)),
        DomainState::Contains => condition
            .value
            .as_deref()
            .is_some_and(|v| field.value.contains_item(v)),
    }
}

fn apply_target(field: &mut Field, target: &RuleDomain) {
    if target.not {
        field.checked = false;
        return;
    }
    field.checked = true;
    if matches!(
        target.state,
        DomainState::SetToValue | DomainState::Contains
    ) {
        if let Some(value) = target.value.as_deref() {
            field.value = FieldValue::coerced(value, &field.value);
        }
    }
}

fn rule_reason(rule: &Rule) -> String {
    match rule.description.as_deref() {
        Some(description) => format!("Controlled by rule: {description}"),
        None => format!("Controlled by rule: {rule}"),
    }
}
