//! Measures a sleep with a timer, then benchmarks a small piece of work with every reducer.

use std::time::Duration;

use usec_timer::{EvenMedian, Timer};

fn main() -> Result<(), usec_timer::Error> {
    let mut timer = Timer::builder()
        .even_median(EvenMedian::Midpoint)
        .build()?;

    println!("Clock strategy: {}", timer.clock_strategy());
    println!("Clock resolution: {:.3} µs", timer.measure_resolution());

    timer.sample_now();
    std::thread::sleep(Duration::from_millis(10));
    timer.sample_now();

    println!("Slept for {:.3} ms", timer.last_delta_millis());

    let mut numbers = Vec::new();
    let mut push_number = || {
        numbers.push(numbers.len());
        true
    };

    println!("Total: {}", timer.bench(1_000, &mut push_number)?);
    println!("Average: {}", timer.bench_average(1_000, &mut push_number)?);
    println!("Median: {}", timer.bench_median(1_000, &mut push_number)?);

    // A unit of work that gives up stops the run early.
    let mut remaining = 3_u32;
    let outcome = timer.bench_average(10, || {
        remaining = remaining.saturating_sub(1);
        remaining > 0
    })?;

    println!("Early stop: {outcome}");

    Ok(())
}
