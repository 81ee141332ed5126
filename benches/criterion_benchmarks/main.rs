use criterion::criterion_main;

mod arithmetic;
mod gcd;

criterion_main!(gcd::gcd, arithmetic::arithmetic);
