#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! High-resolution elapsed time measurement in microseconds, with benchmark helpers that
//! reduce repeated runs of a unit of work to a total, average or median duration.
//!
//! The core type is [`Timer`]. Each call to [`Timer::sample_now()`] reads the platform clock
//! and records the time elapsed since the previous sample, which can then be read in
//! microseconds, milliseconds or seconds. The same timer drives the benchmark reducers:
//!
//! - [`Timer::bench()`] - total time of `n` iterations, timed as one interval
//! - [`Timer::bench_average()`] - mean time of one iteration
//! - [`Timer::bench_median()`] - median time of one iteration
//!
//! A unit of work is any `FnMut() -> bool` closure. Returning `false` stops the benchmark
//! early, which is reported in the [`BenchOutcome`] rather than as an error.
//!
//! # Measuring a piece of code
//!
//! ```
//! use std::time::Duration;
//!
//! use usec_timer::Timer;
//!
//! let mut timer = Timer::new()?;
//!
//! timer.sample_now();
//! std::thread::sleep(Duration::from_millis(5));
//! timer.sample_now();
//!
//! assert!(timer.last_delta_millis() >= 4.0);
//! # Ok::<(), usec_timer::Error>(())
//! ```
//!
//! Two samples that are not adjacent can be compared by subtracting the absolute times that
//! [`Timer::sample_now()`] returns:
//!
//! ```
//! use usec_timer::Timer;
//!
//! let mut timer = Timer::new()?;
//!
//! let start = timer.sample_now();
//! for _ in 0..3 {
//!     timer.sample_now();
//!     // Each delta covers one loop iteration.
//! }
//! let total_micros = timer.sample_now() - start;
//!
//! assert!(total_micros >= 0.0);
//! # Ok::<(), usec_timer::Error>(())
//! ```
//!
//! # Benchmarking
//!
//! ```
//! use usec_timer::Timer;
//!
//! let mut timer = Timer::new()?;
//! let mut text = String::new();
//!
//! let outcome = timer.bench_median(100, || {
//!     text.push_str("hello");
//!     text.len() < 1_000_000
//! })?;
//!
//! println!("Median append: {outcome}");
//! # Ok::<(), usec_timer::Error>(())
//! ```
//!
//! # Platform clocks
//!
//! The clock is selected when the package is built, see [`ClockStrategy`]:
//!
//! - Windows reads the performance counter.
//! - Unix reads the wall clock with a microsecond field.
//! - Other targets, or any target with the `processor-clock` feature enabled, read the
//!   processor time of the current process. This clock does not advance while the process
//!   sleeps and may wrap around after a platform-defined interval.
//!
//! Use [`Timer::measure_resolution()`] to find out the smallest increment the selected clock
//! can observe on the current machine.
//!
//! # Diagnostics
//!
//! Rejected arguments, clock failures and benchmarks that stop early are reported to a
//! [`DiagnosticSink`], by default [`TracingSink`] which emits `tracing` events. Supply a
//! different sink via [`TimerBuilder::diagnostics()`].
//!
//! # Compatibility
//!
//! The [`compat`] module offers the same functionality as free functions with optional
//! handles and sentinel-encoded results, for callers that depend on that calling convention.

mod bench;
mod builder;
mod diagnostics;
mod error;
mod median;
mod outcome;
mod pal;
mod strategy;
mod timer;

pub mod compat;

pub use builder::*;
pub use diagnostics::*;
pub use error::*;
pub use median::EvenMedian;
pub use outcome::*;
pub use strategy::*;
pub use timer::*;
