//! Fake platform implementation for testing.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use crate::ClockStrategy;
use crate::pal::Platform;

/// Ticks per second of the fake clock unless overridden. One tick is one microsecond.
pub(crate) const FAKE_TICKS_PER_SECOND: u64 = 1_000_000;

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    now: u64,
    step: u64,
    scripted: VecDeque<u64>,
    frequency: Option<u64>,
    failing_reads: usize,
    reads: usize,
}

/// Fake implementation of the platform abstraction for testing.
///
/// Every read returns the current tick count and then advances it by a fixed step.
/// Tests can also script exact readings, advance the clock from inside a unit of work
/// (clones share state) and make reads fail.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a fake clock starting at tick zero that does not advance on its own.
    pub(crate) fn new() -> Self {
        Self::with_step(0)
    }

    /// Creates a fake clock starting at tick zero that advances by `step` after every read.
    pub(crate) fn with_step(step: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                now: 0,
                step,
                scripted: VecDeque::new(),
                frequency: Some(FAKE_TICKS_PER_SECOND),
                failing_reads: 0,
                reads: 0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakePlatformState> {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }

    /// Queues exact readings. Each queued value is returned by one read, after which the clock
    /// continues from that value.
    pub(crate) fn push_readings(&self, readings: impl IntoIterator<Item = u64>) {
        self.lock().scripted.extend(readings);
    }

    /// Moves the clock forward, as if the given number of ticks elapsed.
    pub(crate) fn advance(&self, ticks: u64) {
        let mut state = self.lock();
        state.now = state
            .now
            .checked_add(ticks)
            .expect("fake clock overflow is a test bug");
    }

    pub(crate) fn set_frequency(&self, frequency: u64) {
        self.lock().frequency = Some(frequency);
    }

    /// Makes frequency resolution fail, as on hardware without a high-resolution counter.
    pub(crate) fn remove_frequency(&self) {
        self.lock().frequency = None;
    }

    /// Makes the next `count` reads fail.
    pub(crate) fn fail_next_reads(&self, count: usize) {
        self.lock().failing_reads = count;
    }

    /// How many successful reads have been made.
    pub(crate) fn reads(&self) -> usize {
        self.lock().reads
    }
}

impl Platform for FakePlatform {
    type Sample = u64;
    type Frequency = u64;

    fn strategy(&self) -> ClockStrategy {
        ClockStrategy::PerformanceCounter
    }

    fn frequency(&self) -> io::Result<u64> {
        self.lock()
            .frequency
            .ok_or_else(|| io::Error::other("fake clock has no frequency"))
    }

    fn read_sample(&self) -> io::Result<u64> {
        let mut state = self.lock();

        if state.failing_reads > 0 {
            state.failing_reads = state.failing_reads.saturating_sub(1);
            return Err(io::Error::other("fake clock read failure"));
        }

        if let Some(reading) = state.scripted.pop_front() {
            state.now = reading;
        }

        let reading = state.now;
        state.now = reading
            .checked_add(state.step)
            .expect("fake clock overflow is a test bug");
        state.reads = state.reads.saturating_add(1);

        Ok(reading)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "test values are small enough to be exact"
    )]
    fn to_micros(&self, sample: u64, frequency: u64) -> f64 {
        (sample as f64 * 1_000_000.0) / frequency as f64
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn advances_by_step_after_each_read() {
        let platform = FakePlatform::with_step(5);

        assert_eq!(platform.read_sample().unwrap(), 0);
        assert_eq!(platform.read_sample().unwrap(), 5);
        assert_eq!(platform.read_sample().unwrap(), 10);
        assert_eq!(platform.reads(), 3);
    }

    #[test]
    fn scripted_readings_take_priority() {
        let platform = FakePlatform::with_step(1);
        platform.push_readings([100, 250]);

        assert_eq!(platform.read_sample().unwrap(), 100);
        assert_eq!(platform.read_sample().unwrap(), 250);
        assert_eq!(platform.read_sample().unwrap(), 251);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(42);

        assert_eq!(platform2.read_sample().unwrap(), 42);
    }

    #[test]
    fn failing_reads_are_not_counted() {
        let platform = FakePlatform::new();
        platform.fail_next_reads(2);

        platform.read_sample().unwrap_err();
        platform.read_sample().unwrap_err();
        platform.read_sample().unwrap();

        assert_eq!(platform.reads(), 1);
    }

    #[test]
    fn missing_frequency_is_error() {
        let platform = FakePlatform::new();
        platform.remove_frequency();

        platform.frequency().unwrap_err();
    }
}
