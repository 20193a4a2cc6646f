/// Pure Rust micro-benchmarks for the floodstat estimation core.
///
/// Uses std::time::Instant for timing and std::hint::black_box to prevent
/// dead-code elimination. Data is generated from a seeded Gumbel model so
/// every run times the same workload.
use std::hint::black_box;
use std::time::{Duration, Instant};

use floodstat_core::fitting::{fit, Family, FitOptions};
use floodstat_core::gumbel::{Gumbel, Parameters};
use floodstat_core::ranking::RankedSeries;
use floodstat_core::series::AnnualMaxSeries;
use floodstat_core::traits::ExtremeValue;

const REPEATS: usize = 7;
const RETURN_PERIODS: &[f64] = &[2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0];

fn make_series(n: usize, seed: u64) -> AnnualMaxSeries {
    let model = Gumbel::new(Parameters::new(1000.0, 300.0).unwrap());
    AnnualMaxSeries::new(model.sample(n, seed).unwrap(), None).unwrap()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_fit(family: Family, label: &'static str, sizes: &[usize]) {
    let options = FitOptions::default();
    for &n in sizes {
        let series = make_series(n, 42);

        // Warmup
        black_box(fit(&series, family, &options).unwrap());

        let dur = median_time(|| {
            black_box(fit(&series, family, &options).unwrap());
        });
        println!("{label:12} n = {n:>7}  {dur:>12.2?}");
    }
}

fn bench_ranking(sizes: &[usize]) {
    for &n in sizes {
        let series = make_series(n, 42);

        black_box(RankedSeries::from_series(&series).unwrap());

        let dur = median_time(|| {
            let ranked = RankedSeries::from_series(&series).unwrap();
            black_box(ranked.estimates_for(RETURN_PERIODS).unwrap());
        });
        println!("{:12} n = {n:>7}  {dur:>12.2?}", "ranking");
    }
}

fn main() {
    let fit_sizes = [120, 1_000, 10_000];
    let rank_sizes = [1_000, 100_000, 360_000];

    println!("floodstat-core micro-benchmarks (median of {REPEATS})");
    bench_fit(Family::Gumbel, "gumbel fit", &fit_sizes);
    bench_fit(Family::Gev, "gev fit", &fit_sizes);
    bench_ranking(&rank_sizes);
}
