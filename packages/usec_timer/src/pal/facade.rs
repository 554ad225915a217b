use std::fmt::Debug;
use std::io;

use crate::ClockStrategy;
#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};

#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

/// A raw sample from whichever platform the facade wraps.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SampleFacade {
    Real(<BuildTargetPlatform as Platform>::Sample),

    #[cfg(test)]
    Fake(<FakePlatform as Platform>::Sample),
}

/// A frequency from whichever platform the facade wraps.
#[derive(Clone, Copy, Debug)]
pub(crate) enum FrequencyFacade {
    Real(<BuildTargetPlatform as Platform>::Frequency),

    #[cfg(test)]
    Fake(<FakePlatform as Platform>::Frequency),
}

impl Platform for PlatformFacade {
    type Sample = SampleFacade;
    type Frequency = FrequencyFacade;

    fn strategy(&self) -> ClockStrategy {
        match self {
            Self::Real(p) => p.strategy(),
            #[cfg(test)]
            Self::Fake(p) => p.strategy(),
        }
    }

    fn frequency(&self) -> io::Result<FrequencyFacade> {
        match self {
            Self::Real(p) => p.frequency().map(FrequencyFacade::Real),
            #[cfg(test)]
            Self::Fake(p) => p.frequency().map(FrequencyFacade::Fake),
        }
    }

    fn read_sample(&self) -> io::Result<SampleFacade> {
        match self {
            Self::Real(p) => p.read_sample().map(SampleFacade::Real),
            #[cfg(test)]
            Self::Fake(p) => p.read_sample().map(SampleFacade::Fake),
        }
    }

    fn to_micros(&self, sample: SampleFacade, frequency: FrequencyFacade) -> f64 {
        match (self, sample, frequency) {
            (Self::Real(p), SampleFacade::Real(sample), FrequencyFacade::Real(frequency)) => {
                p.to_micros(sample, frequency)
            }
            #[cfg(test)]
            (Self::Fake(p), SampleFacade::Fake(sample), FrequencyFacade::Fake(frequency)) => {
                p.to_micros(sample, frequency)
            }
            #[cfg(test)]
            _ => panic!("sample and frequency must come from the platform converting them"),
        }
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Fake(p) => p.fmt(f),
        }
    }
}
