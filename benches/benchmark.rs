use criterion::{criterion_group, criterion_main, Criterion};
use flex::distributions::{Gumbel, Normal};
use flex::Distribution as _;
use flex::Flex;
use rand::distributions::Distribution;
use rand_core::SeedableRng;
use rand_distr;
use rand_xoshiro::{Xoshiro128StarStar, Xoshiro256StarStar};

macro_rules! dist_benchmark_32 {
    ($group:ident, $flex_fn:ident, $rand_fn:ident, $flex_dist:expr, $rand_dist:expr) => {
        fn $flex_fn(c: &mut Criterion) {
            let dist = $flex_dist;
            let mut rng = Xoshiro128StarStar::seed_from_u64(0);
            c.bench_function(concat!(stringify!($group), "-flex"), |b| {
                b.iter(|| dist.sample(&mut rng))
            });
        }
        fn $rand_fn(c: &mut Criterion) {
            let dist = $rand_dist;
            let mut rng = Xoshiro128StarStar::seed_from_u64(0);
            c.bench_function(concat!(stringify!($group), "-rand"), |b| {
                b.iter(|| Distribution::<f32>::sample(&dist, &mut rng))
            });
        }

        criterion_group!($group, $rand_fn, $flex_fn);
    };
}

macro_rules! dist_benchmark_64 {
    ($group:ident, $flex_fn:ident, $rand_fn:ident, $flex_dist:expr, $rand_dist:expr) => {
        fn $flex_fn(c: &mut Criterion) {
            let dist = $flex_dist;
            let mut rng = Xoshiro256StarStar::seed_from_u64(0);
            c.bench_function(concat!(stringify!($group), "-flex"), |b| {
                b.iter(|| dist.sample(&mut rng))
            });
        }
        fn $rand_fn(c: &mut Criterion) {
            let dist = $rand_dist;
            let mut rng = Xoshiro256StarStar::seed_from_u64(0);
            c.bench_function(concat!(stringify!($group), "-rand"), |b| {
                b.iter(|| Distribution::<f64>::sample(&dist, &mut rng))
            });
        }

        criterion_group!($group, $rand_fn, $flex_fn);
    };
}

dist_benchmark_32!(
    normal_32,
    flex_normal_32_bench,
    rand_normal_32_bench,
    Normal::new(1.0_f32, 2.0_f32).unwrap(),
    rand_distr::Normal::new(1.0_f32, 2.0_f32).unwrap()
);

dist_benchmark_64!(
    normal_64,
    flex_normal_64_bench,
    rand_normal_64_bench,
    Normal::new(1.0_f64, 2.0_f64).unwrap(),
    rand_distr::Normal::new(1.0_f64, 2.0_f64).unwrap()
);

dist_benchmark_64!(
    gumbel_64,
    flex_gumbel_64_bench,
    rand_gumbel_64_bench,
    Gumbel::new(1.0_f64, 2.0_f64).unwrap(),
    rand_distr::Gumbel::new(1.0_f64, 2.0_f64).unwrap()
);

fn flex_quartic_64_bench(c: &mut Criterion) {
    let f0 = |x: f64| -(x * x * x * x) + 5.0 * x * x - 4.0;
    let f1 = |x: f64| -4.0 * x * x * x + 10.0 * x;
    let f2 = |x: f64| -12.0 * x * x + 10.0;
    let dist = Flex::new(f0, f1, f2, 1.5, &[-3.0, -1.5, 0.0, 1.5, 3.0], 1.1).unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(0);
    c.bench_function("quartic_64-flex", |b| b.iter(|| dist.sample(&mut rng)));
}

criterion_group!(quartic_64, flex_quartic_64_bench);

criterion_main!(normal_32, normal_64, gumbel_64, quartic_64);
