use crate::types::{ResolveError, Rule, Template};

/// Findings from scanning a template's `extends` graph.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct InheritanceReport {
    is_valid: bool,
    errors: Vec<String>,
}

impl InheritanceReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Ordered ancestor names of the ruleset at `index`, root-most first and
/// excluding the ruleset itself.
///
/// # Errors
///
/// Fails fast on an out-of-range index, a dangling `extends` reference, or
/// a cycle (a ruleset that transitively extends itself); the cycle error
/// carries the full walk path.
pub fn inheritance_chain(template: &Template, index: usize) -> Result<Vec<String>, ResolveError> {
    let start = template
        .rule_sets
        .get(index)
        .ok_or(ResolveError::RuleSetNotFound {
            index,
            count: template.rule_sets.len(),
        })?;

    // The walk doubles as the visited set, seeded with the start name.
    let mut walk = vec![start.name.clone()];
    let mut current = start;
    while let Some(parent_name) = current.extends.as_deref() {
        let parent =
            template
                .find_rule_set(parent_name)
                .ok_or_else(|| ResolveError::MissingParent {
                    rule_set: current.name.clone(),
                    parent: parent_name.to_owned(),
                })?;
        if walk.iter().any(|seen| seen == &parent.name) {
            walk.push(parent.name.clone());
            return Err(ResolveError::CircularInheritance { path: walk });
        }
        walk.push(parent.name.clone());
        current = parent;
    }

    let mut chain: Vec<String> = walk.into_iter().skip(1).collect();
    chain.reverse();
    Ok(chain)
}

/// The effective rule list of the ruleset at `index`: rules inherited
/// through the `extends` ancestry (root-most first) followed by the
/// ruleset's own rules, so own rules evaluate last and win tie-breaks.
///
/// # Errors
///
/// Same failure modes as [`inheritance_chain`]; a cyclic chain is an error,
/// never an infinite loop.
pub fn resolve_rules(template: &Template, index: usize) -> Result<Vec<Rule>, ResolveError> {
    let chain = inheritance_chain(template, index)?;
    let mut rules = Vec::new();
    for name in &chain {
        if let Some(ancestor) = template.find_rule_set(name) {
            rules.extend(ancestor.rules.iter().cloned());
        }
    }
    rules.extend(template.rule_sets[index].rules.iter().cloned());
    Ok(rules)
}

/// Scan every ruleset's `extends` reference for dangling parents,
/// self-extension, and cycles. Accumulates one message per offending
/// ruleset instead of failing on the first.
pub fn validate_inheritance(template: &Template) -> InheritanceReport {
    let mut errors = Vec::new();
    for (index, rule_set) in template.rule_sets.iter().enumerate() {
        let Some(parent) = rule_set.extends.as_deref() else {
            continue;
        };
        if parent == rule_set.name {
            errors.push(format!("ruleset '{}' extends itself", rule_set.name));
            continue;
        }
        if template.find_rule_set(parent).is_none() {
            errors.push(format!(
                "ruleset '{}' extends unknown ruleset '{parent}'",
                rule_set.name
            ));
            continue;
        }
        if let Err(ResolveError::CircularInheritance { path }) =
            inheritance_chain(template, index)
        {
            errors.push(format!(
                "ruleset '{}' is part of an inheritance cycle: {}",
                rule_set.name,
                path.join(" -> ")
            ));
        }
    }
    InheritanceReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
