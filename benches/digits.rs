//! Benchmarks for digit access and in-place algorithms

extern crate criterion;
extern crate digit_view;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use digit_view::{algorithm, Base, Decimal, DigitView, DigitViewMut, Hexadecimal, Radix};

criterion_main!(
    digits,
);

criterion_group!(
    name = digits;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(5))
                       .sample_size(300);
    targets =
        bench_read,
        bench_sort,
        bench_reverse,
);


/// Random numbers from fixed seed
fn make_random_numbers(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = oorandom::Rand64::new(seed as u128);
    (0..count).map(|_| rng.rand_u64() as i64).collect()
}

fn sum_digits<R: Radix>(numbers: &[i64]) -> i64 {
    numbers
        .iter()
        .map(|n| DigitView::<_, R>::new(n).iter().map(|d| d.get()).sum::<i64>())
        .sum()
}

fn bench_read(c: &mut Criterion) {
    let numbers = make_random_numbers(1000, 8675309);

    c.bench_function("read decimal", |b| b.iter(|| black_box(sum_digits::<Decimal>(&numbers))));
    c.bench_function("read hexadecimal", |b| b.iter(|| black_box(sum_digits::<Hexadecimal>(&numbers))));
    c.bench_function("read base 7", |b| b.iter(|| black_box(sum_digits::<Base<7>>(&numbers))));
}

fn bench_sort(c: &mut Criterion) {
    let numbers = make_random_numbers(1000, 3141592653);

    c.bench_function(
        "sort decimal",
        |b| b.iter_batched(
            || numbers.clone(),
            |mut numbers| {
                for n in numbers.iter_mut() {
                    DigitViewMut::<_, Decimal>::new(n).sort();
                }
                numbers
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "sort decimal reversed",
        |b| b.iter_batched(
            || numbers.clone(),
            |mut numbers| {
                for n in numbers.iter_mut() {
                    let view = DigitViewMut::<_, Decimal>::new(n);
                    algorithm::sort(view.rbegin(), view.rend());
                }
                numbers
            },
            criterion::BatchSize::SmallInput));
}

fn bench_reverse(c: &mut Criterion) {
    let numbers = make_random_numbers(1000, 2718281828);

    c.bench_function(
        "reverse decimal",
        |b| b.iter_batched(
            || numbers.clone(),
            |mut numbers| {
                for n in numbers.iter_mut() {
                    DigitViewMut::<_, Decimal>::new(n).reverse();
                }
                numbers
            },
            criterion::BatchSize::SmallInput));
}
