use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use euler_toolkit::integer_math::factorization::prime_factors;
use euler_toolkit::integer_math::primes::{primes, primes_below};
use euler_toolkit::problems::{get_problem, Input};

fn bench_primes(c: &mut Criterion) {
    c.bench_function("primes_below 1e6", |b| b.iter(|| black_box(primes_below(black_box(1_000_000)))));
    c.bench_function("primes iterator first 10000", |b| {
        b.iter(|| black_box(primes().take(10_000).last()))
    });
    c.bench_function("prime_factors 600851475143", |b| {
        b.iter(|| {
            let factors: Vec<u64> = prime_factors(black_box(600_851_475_143)).unwrap().collect();
            black_box(factors)
        })
    });
}

// Every solver of every problem on its actual arguments.
fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");
    group.sample_size(10);
    for id in 1..=7 {
        let problem = get_problem(id).unwrap();
        for (index, name) in problem.solver_names().into_iter().enumerate() {
            group.bench_function(format!("p{:03}/{}", id, name), |b| {
                b.iter(|| black_box(problem.solve(index, Input::Actual)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_primes, bench_solvers);
criterion_main!(benches);
