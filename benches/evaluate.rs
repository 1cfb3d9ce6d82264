use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis::{apply_rules, validate_rules, Field, Rule, RuleDomain};

/// Build `n` fields and a rule chain where rule `i` is enabled by the field
/// rule `i-1` forces on, so a single `apply_rules` call needs multiple
/// passes to converge.
fn build_chain(n: usize) -> (Vec<Field>, Vec<Rule>) {
    let mut fields = vec![Field::new("f0", true).checked()];
    let mut rules = Vec::new();

    for i in 1..n {
        fields.push(Field::new(format!("f{i}"), true));
        rules.push(Rule::new(
            vec![RuleDomain::set(format!("f{}", i - 1))],
            vec![RuleDomain::set(format!("f{i}"))],
        ));
    }

    (fields, rules)
}

fn bench_apply_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_rules");

    for &n in &[5, 20, 50] {
        let (fields, rules) = build_chain(n);
        group.bench_function(format!("{n}_rule_chain"), |b| {
            b.iter(|| apply_rules(black_box(&fields), black_box(&rules)));
        });

        // Converged input: the cheap re-validation path the UI hits on
        // every field edit.
        let converged = apply_rules(&fields, &rules).into_fields();
        group.bench_function(format!("{n}_rule_chain_converged"), |b| {
            b.iter(|| apply_rules(black_box(&converged), black_box(&rules)));
        });
    }

    group.finish();
}

fn bench_validate_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_rules");

    for &n in &[5, 20, 50] {
        let (_, rules) = build_chain(n);
        group.bench_function(format!("{n}_rules"), |b| {
            b.iter(|| validate_rules(black_box(&rules)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply_rules, bench_validate_rules);
criterion_main!(benches);
