//! Benchmarks for call matching and formula deconstruction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sylva::prelude::*;

/// Builds `left<qualifier>name(arg_0, ..., arg_{n-1})`.
fn qualified_call(qualifier: &str, arity: usize) -> Expr {
    Expr::call(
        Expr::call(
            Expr::symbol(qualifier),
            [Expr::symbol("pkg"), Expr::symbol("target")],
        ),
        (0..arity).map(|i| Expr::symbol(format!("arg_{i}"))),
    )
}

fn bench_qualified_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("qualified_match");

    for qualifier in QUALIFIERS {
        let call = qualified_call(qualifier, 4);

        group.bench_with_input(
            BenchmarkId::new("matches_call", qualifier),
            &call,
            |b, call| {
                b.iter(|| {
                    black_box(matches_call(call, |sym| symbol_equals(sym, "target")))
                })
            },
        );
    }

    group.finish();
}

fn bench_namespaced_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("namespaced_match");

    let call = qualified_call("::", 4);
    let plain = Expr::call(Expr::symbol("target"), []);

    group.bench_function("qualified", |b| {
        b.iter(|| {
            black_box(matches_namespaced_call(
                &call,
                |sym| symbol_equals(sym, "target"),
                "pkg",
            ))
        })
    });
    group.bench_function("bare_head", |b| {
        b.iter(|| {
            black_box(matches_namespaced_call(
                &plain,
                |sym| symbol_equals(sym, "target"),
                "pkg",
            ))
        })
    });

    group.finish();
}

fn bench_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula");

    let scope = ScopeRef::new(1);
    let body = qualified_call("::", 2);
    let formula = make_one_sided(body.clone(), scope);

    group.bench_function("make_one_sided", |b| {
        b.iter(|| black_box(make_one_sided(body.clone(), scope)))
    });
    group.bench_function("deconstruct", |b| {
        b.iter(|| {
            let rhs = rhs(&formula).unwrap();
            let scope = scope_of(&formula).unwrap();
            black_box((rhs, scope))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_qualified_matching,
    bench_namespaced_matching,
    bench_formula
);

criterion_main!(benches);
