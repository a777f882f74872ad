use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use vouch::{Chain, begin, collect};

/// A sign-up form with a mix of passing and failing fields.
fn form(username: &str, email: &str, age: u32) -> vouch::Result<Vec<Chain>> {
    Ok(vec![
        begin("Username", username)
            .not_empty()
            .length(3, 16)
            .regexp("[a-z0-9_]+")?,
        begin("Email", email).not_empty().email(),
        begin("Age", age).between(18, 130),
        begin("Tags", vec!["a", "b"]).not_empty().not_equal(Vec::<&str>::new()),
    ])
}

/// Cost of individual rule families on a single chain
fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    group.bench_function("presence", |b| {
        b.iter(|| begin("x", black_box("hello")).not_nil().not_empty())
    });
    group.bench_function("ordering", |b| {
        b.iter(|| begin("x", black_box(42)).greater_than(0).less_than(100).between(0, 50))
    });
    group.bench_function("length_chars", |b| {
        b.iter(|| begin("x", black_box("h\u{e9}llo w\u{f6}rld")).length(3, 8))
    });
    group.bench_function("email", |b| {
        b.iter(|| begin("x", black_box("Jane Doe <jane.doe@example.com>")).email())
    });
    group.bench_function("regexp", |b| {
        b.iter(|| begin("x", black_box("12345")).regexp(r"\d{5}"))
    });

    group.finish();
}

/// Building and collecting whole forms
fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    for forms in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(forms), &forms, |b, &forms| {
            b.iter(|| {
                let chains: Vec<Chain> = (0..forms)
                    .filter_map(|i| form("j", "jane@example", 15 + u32::try_from(i).unwrap_or(0)).ok())
                    .flatten()
                    .collect();
                black_box(collect(&chains))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rules, bench_collect);
criterion_main!(benches);
