//! Recording fake devices for testing OpenClimate components.
//!
//! Each fake implements one capability trait from
//! `openclimate-device-types`, records every invocation, and can be
//! scripted with readings, self-test outcomes, and injected failures.
//! No mocking framework required; assertions go against the recorded
//! counters after exercising the code under test.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

use openclimate_device_types::{
    DeviceError, DeviceResult, Heater, TemperatureSensor, Window,
};

/// Scripted temperature sensor.
///
/// Returns a fixed reading (or a scripted failure) from every
/// `read_temp` call and counts how often it was read.
#[derive(Debug, Clone)]
pub struct FakeTemperatureSensor {
    reading: DeviceResult<i32>,
    self_test_ok: bool,
    read_count: u64,
    self_test_count: u64,
}

impl FakeTemperatureSensor {
    /// Create a sensor that reads 20°C and passes its self-test.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reading(20)
    }

    /// Create a sensor scripted with a fixed reading.
    #[must_use]
    pub fn with_reading(temperature: i32) -> Self {
        Self {
            reading: Ok(temperature),
            self_test_ok: true,
            read_count: 0,
            self_test_count: 0,
        }
    }

    /// Create a sensor whose every read fails with the given error.
    #[must_use]
    pub fn with_failure(error: DeviceError) -> Self {
        Self {
            reading: Err(error),
            self_test_ok: true,
            read_count: 0,
            self_test_count: 0,
        }
    }

    /// Script the self-test outcome.
    #[must_use]
    pub fn with_self_test(mut self, ok: bool) -> Self {
        self.self_test_ok = ok;
        self
    }

    /// Change the scripted reading mid-test.
    pub fn set_reading(&mut self, temperature: i32) {
        self.reading = Ok(temperature);
    }

    /// Number of `read_temp` invocations so far.
    #[must_use]
    pub fn read_count(&self) -> u64 {
        self.read_count
    }

    /// Number of `run_self_test` invocations so far.
    #[must_use]
    pub fn self_test_count(&self) -> u64 {
        self.self_test_count
    }
}

impl Default for FakeTemperatureSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureSensor for FakeTemperatureSensor {
    fn read_temp(&mut self) -> DeviceResult<i32> {
        self.read_count += 1;
        self.reading.clone()
    }

    fn run_self_test(&mut self) -> bool {
        self.self_test_count += 1;
        self.self_test_ok
    }
}

/// Recording heater.
///
/// Counts `turn_on`/`turn_off` invocations and reports a scripted
/// self-test outcome.
#[derive(Debug, Clone, Default)]
pub struct FakeHeater {
    on_count: u64,
    off_count: u64,
    self_test_ok: bool,
    self_test_count: u64,
    fail_commands: bool,
}

impl FakeHeater {
    /// Create a heater that accepts every command and passes self-test.
    #[must_use]
    pub fn new() -> Self {
        Self {
            self_test_ok: true,
            ..Self::default()
        }
    }

    /// Script the self-test outcome.
    #[must_use]
    pub fn with_self_test(mut self, ok: bool) -> Self {
        self.self_test_ok = ok;
        self
    }

    /// Create a heater that rejects every command with a hardware fault.
    #[must_use]
    pub fn with_command_failure() -> Self {
        Self {
            fail_commands: true,
            ..Self::new()
        }
    }

    /// Number of `turn_on` invocations so far.
    #[must_use]
    pub fn on_count(&self) -> u64 {
        self.on_count
    }

    /// Number of `turn_off` invocations so far.
    #[must_use]
    pub fn off_count(&self) -> u64 {
        self.off_count
    }

    /// Number of `run_self_test` invocations so far.
    #[must_use]
    pub fn self_test_count(&self) -> u64 {
        self.self_test_count
    }

    /// Total commands received, on and off combined.
    #[must_use]
    pub fn total_commands(&self) -> u64 {
        self.on_count + self.off_count
    }
}

impl Heater for FakeHeater {
    fn turn_on(&mut self) -> DeviceResult<()> {
        if self.fail_commands {
            return Err(DeviceError::Hardware("fake heater fault".into()));
        }
        self.on_count += 1;
        Ok(())
    }

    fn turn_off(&mut self) -> DeviceResult<()> {
        if self.fail_commands {
            return Err(DeviceError::Hardware("fake heater fault".into()));
        }
        self.off_count += 1;
        Ok(())
    }

    fn run_self_test(&mut self) -> bool {
        self.self_test_count += 1;
        self.self_test_ok
    }
}

/// Recording window actuator.
#[derive(Debug, Clone, Default)]
pub struct FakeWindow {
    open_count: u64,
    close_count: u64,
    fail_commands: bool,
}

impl FakeWindow {
    /// Create a window that accepts every command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a window that rejects every command with a hardware fault.
    #[must_use]
    pub fn with_command_failure() -> Self {
        Self {
            fail_commands: true,
            ..Self::new()
        }
    }

    /// Number of `open` invocations so far.
    #[must_use]
    pub fn open_count(&self) -> u64 {
        self.open_count
    }

    /// Number of `close` invocations so far.
    #[must_use]
    pub fn close_count(&self) -> u64 {
        self.close_count
    }

    /// Total commands received, open and close combined.
    #[must_use]
    pub fn total_commands(&self) -> u64 {
        self.open_count + self.close_count
    }
}

impl Window for FakeWindow {
    fn open(&mut self) -> DeviceResult<()> {
        if self.fail_commands {
            return Err(DeviceError::Hardware("fake window fault".into()));
        }
        self.open_count += 1;
        Ok(())
    }

    fn close(&mut self) -> DeviceResult<()> {
        if self.fail_commands {
            return Err(DeviceError::Hardware("fake window fault".into()));
        }
        self.close_count += 1;
        Ok(())
    }
}
