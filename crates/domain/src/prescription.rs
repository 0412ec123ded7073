use std::{fmt, ops::RangeInclusive, slice::Iter};

use derive_more::{Display, Into};
use rand::Rng;

use crate::{ExerciseSelection, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Intensity {
    Low,
    High,
}

impl Intensity {
    const LOW_SETS: RangeInclusive<u32> = 1..=4;
    const LOW_REPS: RangeInclusive<u32> = 4..=10;
    const HIGH_SETS: RangeInclusive<u32> = 4..=8;
    const HIGH_REPS: RangeInclusive<u32> = 10..=16;

    #[must_use]
    pub fn sets_range(self) -> RangeInclusive<u32> {
        match self {
            Intensity::Low => Self::LOW_SETS,
            Intensity::High => Self::HIGH_SETS,
        }
    }

    #[must_use]
    pub fn reps_range(self) -> RangeInclusive<u32> {
        match self {
            Intensity::Low => Self::LOW_REPS,
            Intensity::High => Self::HIGH_REPS,
        }
    }
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITIES: [Intensity; 2] = [Intensity::Low, Intensity::High];
        INTENSITIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::High => "High",
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..100).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
}

/// Draws a sets/reps pair uniformly from the ranges of the given intensity.
///
/// Successive calls are independent.
#[must_use]
pub fn generate_sets_reps<R: Rng + ?Sized>(intensity: Intensity, rng: &mut R) -> (Sets, Reps) {
    // The intensity ranges lie within the valid sets and reps ranges.
    (
        Sets::new(rng.gen_range(intensity.sets_range())).unwrap(),
        Reps::new(rng.gen_range(intensity.reps_range())).unwrap(),
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub exercise: ExerciseSelection,
    pub sets: Sets,
    pub reps: Reps,
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Sets: {} - Reps: {}", self.exercise, self.sets, self.reps)
    }
}
