//! Timing a single partition over the sequence `0, 1, ..., n-1`

use crate::algorithm::partition::{Partition, PartitionEngine};
use crate::io::configuration::BENCHMARK_MULTIPLE;
use crate::io::error::{Result, invalid_parameter};
use std::time::{Duration, Instant};

/// Measured outcome of one benchmark run
#[derive(Debug)]
pub struct BenchmarkRun {
    /// Number of generated elements
    pub elements: usize,
    /// Wall-clock time spent partitioning
    pub elapsed: Duration,
    /// Partition that was produced
    pub partition: Partition<u64>,
}

impl BenchmarkRun {
    /// Elapsed time in microseconds
    pub fn micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Generate the benchmark input `0..elements`
///
/// # Errors
///
/// Returns an invalid parameter error unless `elements` is a multiple of
/// [`BENCHMARK_MULTIPLE`], since other lengths can give an odd sum
pub fn benchmark_sequence(elements: usize) -> Result<Vec<u64>> {
    if elements % BENCHMARK_MULTIPLE != 0 {
        return Err(invalid_parameter(
            "benchmark",
            &elements,
            &format!("amount of elements has to be a multiple of {BENCHMARK_MULTIPLE}"),
        ));
    }
    Ok((0..elements as u64).collect())
}

/// Partition the benchmark sequence of length `elements` and time it
///
/// # Errors
///
/// Returns an error if the length is rejected or the table cannot be built
pub fn run_benchmark(engine: &PartitionEngine, elements: usize) -> Result<BenchmarkRun> {
    let values = benchmark_sequence(elements)?;

    let start = Instant::now();
    let partition = engine.partition(&values)?;
    let elapsed = start.elapsed();

    Ok(BenchmarkRun {
        elements,
        elapsed,
        partition,
    })
}
