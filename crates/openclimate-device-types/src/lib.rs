//! Device capability traits for climate control hardware
//!
//! This crate defines the seams between the environmental control core
//! and the concrete sensor/actuator drivers, abstracted from specific
//! vendor implementations. Drivers implement these traits; the core
//! never talks to hardware directly.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

use thiserror::Error;

/// Errors reported by device drivers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The sensor could not produce a reading.
    #[error("Sensor read failed: {0}")]
    ReadFailed(String),

    /// The sensor produced a reading outside its operational range.
    #[error("Sensor reading out of range: {0}")]
    OutOfRange(i32),

    /// The device is no longer reachable.
    #[error("Device disconnected")]
    Disconnected,

    /// A hardware fault reported by the driver.
    #[error("Hardware fault: {0}")]
    Hardware(String),
}

/// A specialized `Result` type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Temperature sensor capability.
///
/// Readings are whole degrees Celsius. A failed read must be reported
/// through the `Result`; implementations must not return a sentinel
/// value in place of an error.
pub trait TemperatureSensor: Send {
    /// Read the current temperature in whole degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the sensor cannot produce a valid
    /// reading.
    fn read_temp(&mut self) -> DeviceResult<i32>;

    /// Run the sensor's own diagnostics and report pass/fail.
    fn run_self_test(&mut self) -> bool;
}

/// Heater actuator capability.
///
/// Commands are idempotent: turning an already-running heater on (or an
/// idle one off) is a no-op at the hardware level and must succeed.
pub trait Heater: Send {
    /// Engage the heating element.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the command cannot be delivered.
    fn turn_on(&mut self) -> DeviceResult<()>;

    /// Disengage the heating element.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the command cannot be delivered.
    fn turn_off(&mut self) -> DeviceResult<()>;

    /// Run the heater's own diagnostics and report pass/fail.
    fn run_self_test(&mut self) -> bool;
}

/// Window actuator capability.
///
/// Commands are idempotent, like [`Heater`] commands. The window has no
/// self-test facility.
pub trait Window: Send {
    /// Open the window for passive cooling.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the command cannot be delivered.
    fn open(&mut self) -> DeviceResult<()>;

    /// Close the window.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the command cannot be delivered.
    fn close(&mut self) -> DeviceResult<()>;
}
