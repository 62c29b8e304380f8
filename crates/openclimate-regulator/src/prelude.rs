//! Prelude for openclimate-regulator.
//!
//! This module re-exports the most commonly used types for convenient
//! importing.
//!
//! # Example
//!
//! ```rust
//! use openclimate_regulator::prelude::*;
//!
//! let band = ThresholdBand::new(5, 25).expect("Valid band");
//! assert_eq!(band.classify(30), BandPosition::AboveBand);
//! ```

pub use crate::band::{BandPosition, ThresholdBand};
pub use crate::error::{RegulatorError, RegulatorResult};
pub use crate::regulator::{HeaterCommand, RegulationAction, Regulator, WindowCommand};
