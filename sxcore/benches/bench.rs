use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sxcore::prelude::*;

/// Random expression over `symbols`, seeded for determinism.
fn build_random_expr(rng: &mut impl Rng, symbols: &[Sx], budget: usize) -> Sx {
    if budget == 0 || rng.random_bool(0.2) {
        return match rng.random_range(0..=3) {
            0 => Sx::constant(rng.random_range(-4..=4) as f64 * 0.5),
            _ => symbols[rng.random_range(0..symbols.len())].clone(),
        };
    }

    let a = build_random_expr(rng, symbols, budget - 1);
    match rng.random_range(0..=7) {
        0 => &a + &build_random_expr(rng, symbols, budget - 1),
        1 => &a - &build_random_expr(rng, symbols, budget - 1),
        2 => &a * &build_random_expr(rng, symbols, budget - 1),
        3 => &a / &build_random_expr(rng, symbols, budget - 1),
        4 => -&a,
        5 => a.sin(),
        6 => a.sqrt(),
        _ => a.ge(&build_random_expr(rng, symbols, budget - 1)),
    }
}

fn bench_construction(c: &mut Criterion) {
    let symbols: Vec<Sx> = ["x", "y", "z"].into_iter().map(|s| Sx::symbol(s)).collect();

    c.bench_function("random_expr_depth_12", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(0x42);
            black_box(build_random_expr(&mut rng, &symbols, 12))
        })
    });

    c.bench_function("running_sum_10k", |b| {
        b.iter(|| {
            let mut acc = Sx::zero();
            for s in symbols.iter().cycle().take(10_000) {
                acc += s;
            }
            black_box(acc)
        })
    });

    c.bench_function("constant_cache_lookup", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        b.iter(|| black_box(Sx::constant(rng.random_range(0..1024) as f64 * 0.25)))
    });
}

fn bench_power(c: &mut Criterion) {
    let x = Sx::symbol("x");
    c.bench_function("powi_1_to_100", |b| {
        b.iter(|| {
            for n in 1..=100 {
                black_box(x.powi(n));
            }
        })
    });
}

fn bench_print(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    let symbols: Vec<Sx> = ["x", "y", "z"].into_iter().map(|s| Sx::symbol(s)).collect();
    let e = build_random_expr(&mut rng, &symbols, 16);
    c.bench_function("print_budget_10k", |b| b.iter(|| black_box(e.to_string())));
}

criterion_group!(benches, bench_construction, bench_power, bench_print);
criterion_main!(benches);
