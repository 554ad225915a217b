use std::{io, mem, ptr};

use libc::timeval;

use crate::ClockStrategy;
use crate::pal::Platform;

/// Reads the wall clock via `gettimeofday()`.
///
/// Samples are already scaled (whole seconds plus a microsecond field), so no frequency is
/// needed. Monotonicity is whatever the operating system provides for this clock.
#[derive(Debug)]
pub(crate) struct WallClockPlatform;

impl WallClockPlatform {
    pub(crate) const fn new() -> Self {
        Self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WallClockSample {
    pub(crate) seconds: i64,
    pub(crate) micros: i64,
}

impl Platform for WallClockPlatform {
    type Sample = WallClockSample;
    type Frequency = ();

    fn strategy(&self) -> ClockStrategy {
        ClockStrategy::WallClock
    }

    fn frequency(&self) -> io::Result<()> {
        Ok(())
    }

    #[allow(
        clippy::useless_conversion,
        reason = "time_t and suseconds_t are narrower than i64 on some targets"
    )]
    fn read_sample(&self) -> io::Result<WallClockSample> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut tv: timeval = unsafe { mem::zeroed() };

        // SAFETY: We are passing a valid pointer and a null time zone, no other safety requirements.
        let result = unsafe { libc::gettimeofday(&raw mut tv, ptr::null_mut()) };

        if result != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(WallClockSample {
            seconds: i64::from(tv.tv_sec),
            micros: i64::from(tv.tv_usec),
        })
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "conversion is done in floating point on purpose to avoid integer overflow"
    )]
    fn to_micros(&self, sample: WallClockSample, (): ()) -> f64 {
        (sample.seconds as f64 * 1_000_000.0) + sample.micros as f64
    }
}
