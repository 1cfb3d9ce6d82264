use crate::types::{normalized_conditions, DomainState, Rule, RuleDomain};

/// Findings from analytically checking a rule list. `errors` are logical
/// contradictions; `warnings` are advisory (merge candidates). Rule numbers
/// in messages are 1-based positions in the supplied order.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct RuleReport {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl RuleReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Check a rule list for contradictions and merge candidates without
/// evaluating it against any fields.
///
/// Contradictions never block [`apply_rules`](crate::apply_rules), which
/// applies rules as given with array order deciding. Callers that opted
/// into validate-after-mutate semantics roll a mutation back when this
/// reports `is_valid() == false`.
pub fn validate_rules(rules: &[Rule]) -> RuleReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_self_contradictions(rules, &mut errors);
    check_condition_groups(rules, &mut errors, &mut warnings);

    RuleReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// A single rule whose conditions require a field both ways can never fire.
fn check_self_contradictions(rules: &[Rule], errors: &mut Vec<String>) {
    for (number, rule) in rules.iter().enumerate() {
        for (i, a) in rule.conditions.iter().enumerate() {
            for b in &rule.conditions[i + 1..] {
                if a.name == b.name && a.state == b.state && a.value == b.value && a.not != b.not {
                    errors.push(format!(
                        "rule {} contradicts itself: '{}' is required both {} and negated",
                        number + 1,
                        a.name,
                        condition_kind(a.state),
                    ));
                }
            }
        }
    }
}

fn condition_kind(state: DomainState) -> &'static str {
    match state {
        DomainState::Set => "set",
        DomainState::SetToValue => "equal",
        DomainState::Contains => "containing",
    }
}

/// Group rules by order-independent condition set, then flag conflicting
/// targets (errors) and compatible duplicates (merge warnings).
fn check_condition_groups(rules: &[Rule], errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let keys: Vec<_> = rules.iter().map(normalized_conditions).collect();

    // Linear grouping keeps first-occurrence order for stable messages.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..rules.len() {
        match groups
            .iter_mut()
            .find(|g| keys[g[0]] == keys[i])
        {
            Some(group) => group.push(i),
            None => groups.push(vec![i]),
        }
    }

    for group in groups.iter().filter(|g| g.len() >= 2) {
        let mut conflict = false;
        for (gi, &i) in group.iter().enumerate() {
            for &j in &group[gi + 1..] {
                for (field, first, second) in conflicting_targets(&rules[i], &rules[j]) {
                    conflict = true;
                    if rules[i].is_unconditional() {
                        errors.push(format!(
                            "unconditional rules {} and {} force '{field}' differently: \
                             {first} vs {second}",
                            i + 1,
                            j + 1,
                        ));
                    } else {
                        errors.push(format!(
                            "rules {} and {} fire on identical conditions but force \
                             '{field}' differently: {first} vs {second}",
                            i + 1,
                            j + 1,
                        ));
                    }
                }
            }
        }
        if !conflict {
            warnings.push(format!(
                "rules {} have identical conditions and compatible targets; \
                 they can be merged",
                format_numbers(group),
            ));
        }
    }
}

/// Targets of `a` and `b` on the same field whose prescriptions differ in
/// state, `not` flag, or value.
fn conflicting_targets<'r>(a: &'r Rule, b: &'r Rule) -> Vec<(&'r str, String, String)> {
    let mut out = Vec::new();
    for ta in &a.targets {
        for tb in &b.targets {
            if ta.name == tb.name && targets_differ(ta, tb) {
                out.push((
                    ta.name.as_str(),
                    ta.describe_target(),
                    tb.describe_target(),
                ));
            }
        }
    }
    out
}

fn targets_differ(a: &RuleDomain, b: &RuleDomain) -> bool {
    a.state != b.state || a.not != b.not || a.value != b.value
}

/// `[0, 2, 3]` renders as `"1, 3 and 4"` (1-based).
fn format_numbers(indices: &[usize]) -> String {
    let numbers: Vec<String> = indices.iter().map(|i| (i + 1).to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [single] => single.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}
