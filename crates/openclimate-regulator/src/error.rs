//! Error types for the regulation core.

use openclimate_device_types::DeviceError;
use thiserror::Error;

/// Errors that can occur during regulation and reconfiguration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegulatorError {
    /// A threshold update would leave the band with `lower > upper`.
    ///
    /// Raised before any mutation; the band is unchanged when this is
    /// returned.
    #[error("Invalid threshold: lower {lower} must not exceed upper {upper}")]
    InvalidThreshold {
        /// Lower threshold the rejected configuration would have had.
        lower: i32,
        /// Upper threshold the rejected configuration would have had.
        upper: i32,
    },

    /// A collaborator device reported a fault.
    #[error(transparent)]
    Device(#[from] DeviceError),
}

impl RegulatorError {
    /// Create an invalid threshold error for a rejected `(lower, upper)` pair.
    #[must_use]
    pub fn invalid_threshold(lower: i32, upper: i32) -> Self {
        Self::InvalidThreshold { lower, upper }
    }
}

/// A specialized `Result` type for regulator operations.
pub type RegulatorResult<T> = Result<T, RegulatorError>;
