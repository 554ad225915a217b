use std::fmt::Debug;
use std::io;

use crate::ClockStrategy;

/// One platform clock strategy.
///
/// Reading a sample and converting it to microseconds are separate operations so that
/// the raw sample can be stored and converted again later without re-reading the clock.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// A raw reading of the clock.
    type Sample: Copy + Debug + Send + Sync + 'static;

    /// The scale reference needed to convert a raw sample, resolved once per timer.
    type Frequency: Copy + Debug + Send + Sync + 'static;

    fn strategy(&self) -> ClockStrategy;

    /// Resolves the scale reference of the clock.
    ///
    /// Fails if the platform has no clock of this kind (e.g. no high-resolution counter).
    fn frequency(&self) -> io::Result<Self::Frequency>;

    /// Reads the clock. Fails only if the operating system reports an error.
    fn read_sample(&self) -> io::Result<Self::Sample>;

    /// Converts a raw sample to absolute microseconds, using double precision throughout.
    fn to_micros(&self, sample: Self::Sample, frequency: Self::Frequency) -> f64;
}
