//! The environmental control core.
//!
//! `Regulator` drives a heater and a window actuator from a temperature
//! sensor reading compared against a [`ThresholdBand`]. One call to
//! [`Regulator::regulate`] performs one synchronous control cycle; an
//! external loop chooses the cadence.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use openclimate_device_types::{Heater, TemperatureSensor, Window};

use crate::band::{BandPosition, ThresholdBand};
use crate::error::RegulatorResult;

/// Command issued to the heater during a regulation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaterCommand {
    /// Heating engaged.
    On,
    /// Heating disengaged.
    Off,
}

/// Command issued to the window during a regulation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowCommand {
    /// Window opened for passive cooling.
    Open,
    /// Window closed.
    Closed,
}

/// Summary of one regulation decision.
///
/// Returned by [`Regulator::regulate`] so callers can log or record
/// what the cycle did without re-deriving it from device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationAction {
    /// Temperature reading the decision was based on.
    pub temperature: i32,
    /// Command issued to the heater.
    pub heater: HeaterCommand,
    /// Command issued to the window.
    pub window: WindowCommand,
}

impl RegulationAction {
    /// Derive the action for a reading against a band.
    ///
    /// Heater turns on iff the reading is strictly below the band;
    /// window opens iff the reading is strictly above it. Both band
    /// endpoints fall in the deadband: heater off, window closed.
    #[must_use]
    pub fn for_reading(temperature: i32, band: &ThresholdBand) -> Self {
        let (heater, window) = match band.classify(temperature) {
            BandPosition::BelowBand => (HeaterCommand::On, WindowCommand::Closed),
            BandPosition::InBand => (HeaterCommand::Off, WindowCommand::Closed),
            BandPosition::AboveBand => (HeaterCommand::Off, WindowCommand::Open),
        };
        Self {
            temperature,
            heater,
            window,
        }
    }
}

/// Threshold-based environmental control core.
///
/// Borrows its three collaborator devices for the duration of its own
/// lifetime; the caller owns the devices and sequences calls. The
/// regulator itself is single-threaded and keeps no state beyond the
/// threshold band.
///
/// # Example
///
/// ```rust
/// use openclimate_regulator::prelude::*;
/// use openclimate_test_helpers::{FakeHeater, FakeTemperatureSensor, FakeWindow};
///
/// let mut sensor = FakeTemperatureSensor::with_reading(2);
/// let mut heater = FakeHeater::new();
/// let mut window = FakeWindow::new();
///
/// let mut regulator =
///     Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)
///         .expect("Valid thresholds");
/// let action = regulator.regulate().expect("Healthy devices");
///
/// assert_eq!(action.heater, HeaterCommand::On);
/// assert_eq!(action.window, WindowCommand::Closed);
/// ```
pub struct Regulator<'a> {
    sensor: &'a mut dyn TemperatureSensor,
    heater: &'a mut dyn Heater,
    window: &'a mut dyn Window,
    band: ThresholdBand,
}

impl core::fmt::Debug for Regulator<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Regulator")
            .field("band", &self.band)
            .finish_non_exhaustive()
    }
}

impl<'a> Regulator<'a> {
    /// Create a regulator with an already-validated threshold band.
    #[must_use]
    pub fn new(
        sensor: &'a mut dyn TemperatureSensor,
        heater: &'a mut dyn Heater,
        window: &'a mut dyn Window,
        band: ThresholdBand,
    ) -> Self {
        Self {
            sensor,
            heater,
            window,
            band,
        }
    }

    /// Create a regulator from a raw `(lower, upper)` threshold pair.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegulatorError::InvalidThreshold`] if
    /// `lower > upper`.
    pub fn with_thresholds(
        sensor: &'a mut dyn TemperatureSensor,
        heater: &'a mut dyn Heater,
        window: &'a mut dyn Window,
        lower: i32,
        upper: i32,
    ) -> RegulatorResult<Self> {
        let band = ThresholdBand::new(lower, upper)?;
        Ok(Self::new(sensor, heater, window, band))
    }

    /// Get the current threshold band.
    #[must_use]
    pub fn band(&self) -> ThresholdBand {
        self.band
    }

    /// Get the lower threshold in whole degrees Celsius.
    #[must_use]
    pub fn lower_threshold(&self) -> i32 {
        self.band.lower()
    }

    /// Get the upper threshold in whole degrees Celsius.
    #[must_use]
    pub fn upper_threshold(&self) -> i32 {
        self.band.upper()
    }

    /// Update the lower threshold.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegulatorError::InvalidThreshold`] if `value`
    /// exceeds the current upper threshold. Thresholds are unchanged on
    /// failure.
    pub fn set_lower_threshold(&mut self, value: i32) -> RegulatorResult<()> {
        self.band.set_lower(value).inspect_err(|_| {
            warn!(
                requested = value,
                upper = self.band.upper(),
                "rejected lower threshold update"
            );
        })
    }

    /// Update the upper threshold.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegulatorError::InvalidThreshold`] if `value`
    /// is below the current lower threshold. Thresholds are unchanged
    /// on failure.
    pub fn set_upper_threshold(&mut self, value: i32) -> RegulatorResult<()> {
        self.band.set_upper(value).inspect_err(|_| {
            warn!(
                requested = value,
                lower = self.band.lower(),
                "rejected upper threshold update"
            );
        })
    }

    /// Run the combined device self-test.
    ///
    /// Queries the heater and the sensor diagnostics; both devices are
    /// always queried, even if the first one fails. Returns `true` only
    /// if both pass. The window has no self-test facility and is not
    /// consulted. Thresholds and actuator state are untouched.
    pub fn run_self_test(&mut self) -> bool {
        let heater_ok = self.heater.run_self_test();
        let sensor_ok = self.sensor.run_self_test();

        if !heater_ok || !sensor_ok {
            warn!(heater_ok, sensor_ok, "self-test failed");
        }

        heater_ok && sensor_ok
    }

    /// Run one regulation cycle.
    ///
    /// Reads the temperature once, then issues exactly one heater
    /// command and exactly one window command per the decision table:
    /// heater on iff the reading is below the lower threshold, window
    /// open iff it is above the upper threshold, everything else is the
    /// deadband (heater off, window closed). Commands are idempotent,
    /// so re-issuing the previous cycle's command is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegulatorError::Device`] if the sensor read
    /// fails (no actuator command is issued in that case) or if an
    /// actuator rejects its command. Device faults are propagated
    /// unmodified; there is no retry.
    pub fn regulate(&mut self) -> RegulatorResult<RegulationAction> {
        let temperature = self.sensor.read_temp()?;
        let action = RegulationAction::for_reading(temperature, &self.band);

        debug!(
            temperature,
            lower = self.band.lower(),
            upper = self.band.upper(),
            heater = ?action.heater,
            window = ?action.window,
            "regulation decision"
        );

        match action.heater {
            HeaterCommand::On => self.heater.turn_on()?,
            HeaterCommand::Off => self.heater.turn_off()?,
        }
        match action.window {
            WindowCommand::Open => self.window.open()?,
            WindowCommand::Closed => self.window.close()?,
        }

        Ok(action)
    }
}
