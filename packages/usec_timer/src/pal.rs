//! Platform abstraction layer: reads raw samples from the platform clock and converts them
//! to microseconds.
//!
//! Exactly one real strategy is compiled per target:
//!
//! * Windows: the performance counter.
//! * Unix: the wall clock with a microsecond field.
//! * Anything else, or any target with the `processor-clock` feature: the processor-time clock.
//!
//! Public API types reach the selected strategy through [`PlatformFacade`], which also lets
//! unit tests substitute a scripted fake clock.

mod abstractions;
mod facade;

pub(crate) use abstractions::*;
pub(crate) use facade::*;

#[cfg(all(windows, not(feature = "processor-clock")))]
mod windows;
#[cfg(all(windows, not(feature = "processor-clock")))]
pub(crate) use windows::*;

#[cfg(all(unix, not(feature = "processor-clock")))]
mod unix;
#[cfg(all(unix, not(feature = "processor-clock")))]
pub(crate) use unix::*;

// Always built for tests so the strategy is exercised on every target.
#[cfg(any(test, feature = "processor-clock", not(any(unix, windows))))]
mod fallback;
#[cfg(any(feature = "processor-clock", not(any(unix, windows))))]
pub(crate) use fallback::*;

#[cfg(test)]
mod fake;
#[cfg(test)]
pub(crate) use fake::*;

#[cfg(all(windows, not(feature = "processor-clock")))]
pub(crate) type BuildTargetPlatform = PerformanceCounterPlatform;

#[cfg(all(unix, not(feature = "processor-clock")))]
pub(crate) type BuildTargetPlatform = WallClockPlatform;

#[cfg(any(feature = "processor-clock", not(any(unix, windows))))]
pub(crate) type BuildTargetPlatform = ProcessorClockPlatform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();
