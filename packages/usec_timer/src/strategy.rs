use std::fmt;

/// Identifies which platform clock a timer is reading.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ClockStrategy {
    /// A monotonic tick counter with a separately queried tick frequency (Windows).
    PerformanceCounter,

    /// The wall clock, read as whole seconds plus a microsecond field (Unix).
    WallClock,

    /// The processor time consumed by the current process, read from a generic clock.
    ///
    /// This only advances while the process is running on a processor, so it does not measure
    /// time spent sleeping or blocked. The underlying counter may also wrap around after a
    /// platform-defined interval, after which deltas spanning the wrap are meaningless.
    ProcessorTime,
}

impl fmt::Display for ClockStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PerformanceCounter => "performance counter",
            Self::WallClock => "wall clock",
            Self::ProcessorTime => "processor time",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn display_is_human_readable() {
        assert_eq!(
            ClockStrategy::PerformanceCounter.to_string(),
            "performance counter"
        );
        assert_eq!(ClockStrategy::WallClock.to_string(), "wall clock");
        assert_eq!(ClockStrategy::ProcessorTime.to_string(), "processor time");
    }
}
