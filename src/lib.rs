mod assemble;
mod error;
mod evaluate;
mod range;
mod resolve;
mod transform;
mod types;
mod validate;

pub use assemble::{merge_templates, migrate_legacy, remove_field};
pub use error::EngineError;
pub use evaluate::{
    apply_rules, apply_rules_traced, is_field_forbidden, is_field_required, Evaluation, Trigger,
};
pub use range::{parse_range, validate_field, validate_value, ParsedRange, ScalarKind};
pub use resolve::{inheritance_chain, resolve_rules, validate_inheritance, InheritanceReport};
pub use transform::{contrapositive, merge_rules};
pub use types::{
    DomainState, Field, FieldValue, ResolveError, Rule, RuleDomain, RuleSet, Template,
    TransformError,
};
pub use validate::{validate_rules, RuleReport};
