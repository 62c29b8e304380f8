//! Validated temperature threshold band.
//!
//! The band carries the two regulation boundaries and guarantees
//! `lower <= upper` at all times. Both endpoints are inclusive; the
//! band may be degenerate (`lower == upper`).

use serde::{Deserialize, Serialize};

use crate::error::{RegulatorError, RegulatorResult};

/// Classification of a temperature reading against a [`ThresholdBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandPosition {
    /// Reading is strictly below the lower threshold.
    BelowBand,
    /// Reading is within `[lower, upper]`, endpoints included.
    InBand,
    /// Reading is strictly above the upper threshold.
    AboveBand,
}

/// Temperature threshold band in whole degrees Celsius.
///
/// Fields are private so the `lower <= upper` invariant cannot be
/// broken from outside; mutation goes through the validated setters.
///
/// # Example
///
/// ```rust
/// use openclimate_regulator::prelude::*;
///
/// let mut band = ThresholdBand::new(5, 25).expect("Valid band");
/// assert_eq!(band.classify(2), BandPosition::BelowBand);
/// assert_eq!(band.classify(25), BandPosition::InBand);
///
/// band.set_upper(27).expect("27 >= lower");
/// assert!(band.set_upper(4).is_err());
/// assert_eq!(band.upper(), 27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdBand {
    /// Inclusive boundary below which heating engages.
    lower: i32,
    /// Inclusive boundary above which cooling engages.
    upper: i32,
}

impl ThresholdBand {
    /// Create a band from a `(lower, upper)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`RegulatorError::InvalidThreshold`] if `lower > upper`.
    pub fn new(lower: i32, upper: i32) -> RegulatorResult<Self> {
        if lower > upper {
            return Err(RegulatorError::invalid_threshold(lower, upper));
        }
        Ok(Self { lower, upper })
    }

    /// Get the lower threshold.
    #[must_use]
    pub fn lower(&self) -> i32 {
        self.lower
    }

    /// Get the upper threshold.
    #[must_use]
    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Update the lower threshold.
    ///
    /// # Errors
    ///
    /// Returns [`RegulatorError::InvalidThreshold`] if `value` exceeds
    /// the current upper threshold. The band is unchanged on failure.
    pub fn set_lower(&mut self, value: i32) -> RegulatorResult<()> {
        if value > self.upper {
            return Err(RegulatorError::invalid_threshold(value, self.upper));
        }
        self.lower = value;
        Ok(())
    }

    /// Update the upper threshold.
    ///
    /// # Errors
    ///
    /// Returns [`RegulatorError::InvalidThreshold`] if `value` is below
    /// the current lower threshold. The band is unchanged on failure.
    pub fn set_upper(&mut self, value: i32) -> RegulatorResult<()> {
        if value < self.lower {
            return Err(RegulatorError::invalid_threshold(self.lower, value));
        }
        self.upper = value;
        Ok(())
    }

    /// Validate the band invariant.
    ///
    /// Useful after deserializing a band from an external source, which
    /// bypasses the validating constructor.
    ///
    /// # Errors
    ///
    /// Returns [`RegulatorError::InvalidThreshold`] if `lower > upper`.
    pub fn validate(&self) -> RegulatorResult<()> {
        if self.lower > self.upper {
            return Err(RegulatorError::invalid_threshold(self.lower, self.upper));
        }
        Ok(())
    }

    /// Classify a reading against the band.
    ///
    /// Both endpoints count as [`BandPosition::InBand`].
    #[must_use]
    pub fn classify(&self, temperature: i32) -> BandPosition {
        if temperature < self.lower {
            BandPosition::BelowBand
        } else if temperature > self.upper {
            BandPosition::AboveBand
        } else {
            BandPosition::InBand
        }
    }
}

impl Default for ThresholdBand {
    /// Default comfort band: heat below 5°C, ventilate above 25°C.
    fn default() -> Self {
        Self { lower: 5, upper: 25 }
    }
}
