use criterion::{black_box, Criterion, criterion_group};

use rational_kinds::data::number_types::rational::{gcd as scan_gcd, simplify};

pub fn gcd_small(c: &mut Criterion) {
    c.bench_function("gcd of small values", |b| b.iter(|| {
        scan_gcd(black_box(12_i32), black_box(18_i32))
    }));
}

pub fn gcd_large(c: &mut Criterion) {
    c.bench_function("gcd of large values", |b| b.iter(|| {
        scan_gcd(black_box(65_536_i64), black_box(1_048_576_i64))
    }));
}

pub fn simplify_outside_domain(c: &mut Criterion) {
    c.bench_function("simplify with a negative numerator", |b| b.iter(|| {
        simplify(black_box(-65_536_i64), black_box(1_048_576_i64))
    }));
}

criterion_group!(gcd,
    gcd_small,
    gcd_large,
    simplify_outside_domain,
);
