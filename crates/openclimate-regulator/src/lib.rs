//! # openclimate-regulator
//!
//! Threshold-based environmental control core.
//!
//! The [`Regulator`] compares a temperature reading against a validated
//! [`ThresholdBand`] and drives a heater and a window actuator through
//! the capability traits from `openclimate-device-types`:
//!
//! - reading below the band: heater on, window closed
//! - reading inside the band (endpoints included): heater off, window closed
//! - reading above the band: heater off, window open
//!
//! Every cycle issues exactly one heater command and one window
//! command; commands are idempotent so steady-state cycles simply
//! re-issue the previous command. Threshold updates are validated at
//! the mutation site and never leave the band with `lower > upper`.
//!
//! The core is single-threaded and synchronous; an external loop owns
//! the devices and the cadence.
//!
//! ## Example
//!
//! ```rust
//! use openclimate_regulator::prelude::*;
//! use openclimate_test_helpers::{FakeHeater, FakeTemperatureSensor, FakeWindow};
//!
//! let mut sensor = FakeTemperatureSensor::with_reading(30);
//! let mut heater = FakeHeater::new();
//! let mut window = FakeWindow::new();
//!
//! let mut regulator =
//!     Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)
//!         .expect("Valid thresholds");
//!
//! let action = regulator.regulate().expect("Healthy devices");
//! assert_eq!(action.window, WindowCommand::Open);
//! assert_eq!(window.open_count(), 1);
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod band;
pub mod error;
pub mod prelude;
pub mod regulator;

pub use band::{BandPosition, ThresholdBand};
pub use error::{RegulatorError, RegulatorResult};
pub use regulator::{HeaterCommand, RegulationAction, Regulator, WindowCommand};
