//! Benchmark the sorters
//!
//! Verifies each implementation on seeded data, then measures throughput.
//! Usage: benchmark [max_size] [run_ms]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use sort_playground::baselines::{StdSorter, StdUnstableSorter};
use sort_playground::logging::init_logging;
use sort_playground::{is_sorted, BubbleSorter, EarlyExitBubbleSorter, Sorter};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

const SEED: u64 = 12345;
const WARMUP_MS: u64 = 50;
const SIZES: [usize; 5] = [10, 100, 500, 1000, 2000];

fn generate_test_data(max_size: usize) -> Vec<Vec<i32>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(SEED);
    let mut tests = Vec::new();

    // The smallest size always runs so there is something to time
    let max_size = max_size.max(SIZES[0]);
    for size in SIZES.into_iter().filter(|&s| s <= max_size) {
        // Random data
        for _ in 0..5 {
            let data: Vec<i32> = (0..size).map(|_| rng.gen_range(-10000..10000)).collect();
            tests.push(data);
        }

        // Nearly sorted (90% sorted)
        for _ in 0..2 {
            let mut data: Vec<i32> = (0..size as i32).collect();
            let swaps = size / 10;
            for _ in 0..swaps {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                data.swap(i, j);
            }
            tests.push(data);
        }

        // Reverse sorted
        let data: Vec<i32> = (0..size as i32).rev().collect();
        tests.push(data);
    }

    tests
}

fn verify_correctness(sorter: &dyn Sorter, tests: &[Vec<i32>]) -> bool {
    for test in tests {
        let mut data = test.clone();
        sorter.sort(&mut data);

        let mut expected = test.clone();
        expected.sort();
        if !is_sorted(&data) || data != expected {
            warn!(sorter = sorter.name(), len = test.len(), "wrong output");
            return false;
        }
    }

    // Edge cases
    let mut empty: Vec<i32> = vec![];
    sorter.sort(&mut empty);

    let mut single = vec![42];
    sorter.sort(&mut single);

    let mut two = vec![5, 3];
    sorter.sort(&mut two);

    empty.is_empty() && single == vec![42] && two == vec![3, 5]
}

fn benchmark(sorter: &dyn Sorter, tests: &[Vec<i32>], warmup_ms: u64, run_ms: u64) -> f64 {
    // Warmup
    let warmup_end = Instant::now() + Duration::from_millis(warmup_ms);
    while Instant::now() < warmup_end {
        for test in tests.iter().take(3) {
            let mut data = test.clone();
            sorter.sort(std::hint::black_box(&mut data));
        }
    }

    // Benchmark
    let mut ops = 0u64;
    let start = Instant::now();
    let end = start + Duration::from_millis(run_ms);
    while Instant::now() < end {
        for test in tests {
            let mut data = test.clone();
            sorter.sort(std::hint::black_box(&mut data));
            ops += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    ops as f64 / elapsed
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let max_size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2000);
    let run_ms: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(300);

    if let Err(e) = init_logging("warn") {
        eprintln!("ERROR: {e}");
    }

    let tests = generate_test_data(max_size);
    info!(cases = tests.len(), max_size, run_ms, "generated test data");

    let sorters: [&dyn Sorter; 4] = [
        &BubbleSorter,
        &EarlyExitBubbleSorter,
        &StdSorter,
        &StdUnstableSorter,
    ];

    let mut results = Vec::new();
    let mut all_correct = true;

    for sorter in sorters {
        let correct = verify_correctness(sorter, &tests);
        all_correct &= correct;
        let ops = if correct {
            benchmark(sorter, &tests, WARMUP_MS, run_ms)
        } else {
            0.0
        };
        debug!(sorter = sorter.name(), ops, correct, "benchmarked");
        results.push(BenchmarkResult {
            name: sorter.name().into(),
            ops_per_second: ops,
            correct,
        });
    }

    let full = FullResults {
        results,
        correctness: all_correct,
    };
    match serde_json::to_string(&full) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
