//! Latency micro-benchmarks behind the "Direct" series.
//!
//! Each benchmark runs a loop unrolled [`UNROLL_FACTOR`] times and reports
//! the average cost of one unrolled step in nanoseconds.

use std::hint::black_box;
use std::time::Instant;

use osm_chart_protocol::ThemeToken;
use serde::Serialize;
use thiserror::Error;

use crate::model::{CATEGORIES, Series};

/// Iterations used when the caller asks for zero.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Statements per loop pass; iteration counts are rounded up to a multiple.
pub const UNROLL_FACTOR: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("{0} iterations cannot be rounded up to a multiple of 10")]
    TooManyIterations(u32),
}

/// Average per-iteration timings, in category order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurements {
    pub iterations: u32,
    pub operation_ns: f64,
    pub function_ns: f64,
    pub syscall_ns: f64,
}

impl Measurements {
    pub fn values(&self) -> [f64; 3] {
        [self.operation_ns, self.function_ns, self.syscall_ns]
    }

    /// Pair each timing with its category name.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        CATEGORIES.into_iter().zip(self.values())
    }

    pub fn into_series(self, name: impl Into<String>, color: ThemeToken) -> Series {
        Series::new(name, self.values(), color)
    }
}

/// Resolve the iteration count actually run: zero selects the default,
/// anything else is rounded up to a multiple of [`UNROLL_FACTOR`].
pub fn normalize_iterations(iterations: u32) -> Result<u32, MeasureError> {
    if iterations == 0 {
        return Ok(DEFAULT_ITERATIONS);
    }
    iterations
        .div_ceil(UNROLL_FACTOR)
        .checked_mul(UNROLL_FACTOR)
        .ok_or(MeasureError::TooManyIterations(iterations))
}

/// Time a single arithmetic increment.
pub fn operation_time(iterations: u32) -> Result<f64, MeasureError> {
    let n = normalize_iterations(iterations)?;
    let mut x = [0u32; UNROLL_FACTOR as usize];

    let start = Instant::now();
    for _ in 0..n / UNROLL_FACTOR {
        x[0] = black_box(x[0]).wrapping_add(1);
        x[1] = black_box(x[1]).wrapping_add(1);
        x[2] = black_box(x[2]).wrapping_add(1);
        x[3] = black_box(x[3]).wrapping_add(1);
        x[4] = black_box(x[4]).wrapping_add(1);
        x[5] = black_box(x[5]).wrapping_add(1);
        x[6] = black_box(x[6]).wrapping_add(1);
        x[7] = black_box(x[7]).wrapping_add(1);
        x[8] = black_box(x[8]).wrapping_add(1);
        x[9] = black_box(x[9]).wrapping_add(1);
    }
    let elapsed = start.elapsed();
    black_box(x);

    Ok(per_iteration(elapsed.as_nanos(), n))
}

#[inline(never)]
fn empty_call() {}

/// Time a call to an empty, non-inlined function.
pub fn function_time(iterations: u32) -> Result<f64, MeasureError> {
    let n = normalize_iterations(iterations)?;
    let f = black_box(empty_call as fn());

    let start = Instant::now();
    for _ in 0..n / UNROLL_FACTOR {
        f();
        f();
        f();
        f();
        f();
        f();
        f();
        f();
        f();
        f();
    }
    let elapsed = start.elapsed();

    Ok(per_iteration(elapsed.as_nanos(), n))
}

/// Time a trivial trap into the kernel (a process id query).
pub fn syscall_time(iterations: u32) -> Result<f64, MeasureError> {
    let n = normalize_iterations(iterations)?;

    let start = Instant::now();
    for _ in 0..n / UNROLL_FACTOR {
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
        black_box(std::process::id());
    }
    let elapsed = start.elapsed();

    Ok(per_iteration(elapsed.as_nanos(), n))
}

/// Run all three benchmarks with the same iteration count.
pub fn measure_all(iterations: u32) -> Result<Measurements, MeasureError> {
    let n = normalize_iterations(iterations)?;
    let m = Measurements {
        iterations: n,
        operation_ns: operation_time(n)?,
        function_ns: function_time(n)?,
        syscall_ns: syscall_time(n)?,
    };
    tracing::debug!(
        iterations = n,
        operation_ns = m.operation_ns,
        function_ns = m.function_ns,
        syscall_ns = m.syscall_ns,
        "measured latencies"
    );
    Ok(m)
}

fn per_iteration(elapsed_ns: u128, iterations: u32) -> f64 {
    elapsed_ns as f64 / f64::from(iterations)
}
