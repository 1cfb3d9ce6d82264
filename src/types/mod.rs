mod error;
mod field;
mod rule;
mod ruleset;
mod template;
mod value;

pub use error::{ResolveError, TransformError};
pub use field::Field;
pub use rule::{DomainState, Rule, RuleDomain};
pub use ruleset::RuleSet;
pub use template::Template;
pub use value::FieldValue;

pub(crate) use field::path_addresses;
pub(crate) use rule::normalized_conditions;
