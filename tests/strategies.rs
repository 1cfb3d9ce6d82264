use proptest::prelude::*;
use trellis::{Field, FieldValue, Rule, RuleDomain};

// --- Fixed field schema ---
// Every generated field array covers these paths once, with random
// checked/value state; generated rule domains only reference paths (or
// their parents) from the same schema, so conditions can actually match.

pub const FIELD_NAMES: &[&str] = &[
    "server.host",
    "server.port",
    "server.tls",
    "client.retries",
    "features",
    "mode",
];

const TEXT_VALUES: &[&str] = &["tls", "plain", "auto", "443"];

pub fn arb_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<bool>().prop_map(FieldValue::Flag),
        (0_i64..10_000).prop_map(FieldValue::from),
        prop::sample::select(TEXT_VALUES).prop_map(FieldValue::from),
        prop::collection::vec(
            prop::sample::select(TEXT_VALUES).prop_map(str::to_owned),
            0..3
        )
        .prop_map(FieldValue::List),
    ]
}

/// One field per schema path, random checked/value state.
pub fn arb_fields() -> impl Strategy<Value = Vec<Field>> {
    prop::collection::vec((any::<bool>(), arb_value()), FIELD_NAMES.len()).prop_map(|states| {
        FIELD_NAMES
            .iter()
            .zip(states)
            .map(|(name, (checked, value))| {
                let mut field = Field::new(*name, value);
                field.checked = checked;
                field
            })
            .collect()
    })
}

/// A rule domain over the schema: random path (including parent paths like
/// `"server"`), state, value, and negation.
pub fn arb_domain() -> impl Strategy<Value = RuleDomain> {
    let paths: &[&str] = &[
        "server",
        "server.host",
        "server.port",
        "server.tls",
        "client.retries",
        "features",
        "mode",
    ];
    (
        prop::sample::select(paths),
        0_u8..3,
        prop::sample::select(TEXT_VALUES),
        any::<bool>(),
    )
        .prop_map(|(name, state, value, negate)| {
            let domain = match state {
                0 => RuleDomain::set(name),
                1 => RuleDomain::set_to_value(name, value),
                _ => RuleDomain::contains(name, value),
            };
            if negate {
                domain.negated()
            } else {
                domain
            }
        })
}

pub fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec(arb_domain(), 0..3),
        prop::collection::vec(arb_domain(), 1..3),
    )
        .prop_map(|(conditions, targets)| Rule::new(conditions, targets))
}

/// A rule that is guaranteed to have conditions (contrapositive input).
pub fn arb_conditional_rule() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec(arb_domain(), 1..4),
        prop::collection::vec(arb_domain(), 1..3),
    )
        .prop_map(|(conditions, targets)| Rule::new(conditions, targets))
}

pub fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(arb_rule(), 0..6)
}
