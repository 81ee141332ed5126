use criterion::{black_box, Criterion, criterion_group};

use rational_kinds::{Rational, Rational64, SimplifiedRational64};

pub fn add_raw(c: &mut Criterion) {
    let left = Rational64::new(7, 12).unwrap();
    let right = Rational64::new(5, 18).unwrap();
    c.bench_function("add raw values", |b| b.iter(|| {
        black_box(&left).add(black_box(&right))
    }));
}

pub fn add_simplified(c: &mut Criterion) {
    let left = SimplifiedRational64::new(7, 12).unwrap();
    let right = SimplifiedRational64::new(5, 18).unwrap();
    c.bench_function("add simplified values", |b| b.iter(|| {
        black_box(&left).add(black_box(&right))
    }));
}

pub fn div_simplified(c: &mut Criterion) {
    let left = SimplifiedRational64::new(144, 233).unwrap();
    let right = SimplifiedRational64::new(89, 377).unwrap();
    c.bench_function("divide simplified values", |b| b.iter(|| {
        black_box(&left).div(black_box(&right))
    }));
}

criterion_group!(arithmetic,
    add_raw,
    add_simplified,
    div_simplified,
);
