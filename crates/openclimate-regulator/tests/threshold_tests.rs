//! Threshold reconfiguration contract tests.

#![cfg(test)]

use openclimate_regulator::prelude::*;
use openclimate_test_helpers::{FakeHeater, FakeTemperatureSensor, FakeWindow};

mod valid_updates {
    use super::*;

    #[test]
    fn test_raise_upper_threshold() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        regulator.set_upper_threshold(27)?;
        assert_eq!(regulator.upper_threshold(), 27);
        Ok(())
    }

    #[test]
    fn test_reassign_lower_threshold_same_value() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        regulator.set_lower_threshold(5)?;
        assert_eq!(regulator.lower_threshold(), 5);
        Ok(())
    }

    #[test]
    fn test_upper_set_to_lower_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        let lower = regulator.lower_threshold();
        regulator.set_upper_threshold(lower)?;
        assert_eq!(regulator.upper_threshold(), lower);
        Ok(())
    }

    #[test]
    fn test_lower_set_to_upper_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        let upper = regulator.upper_threshold();
        regulator.set_lower_threshold(upper)?;
        assert_eq!(regulator.lower_threshold(), upper);
        Ok(())
    }
}

mod rejected_updates {
    use super::*;

    #[test]
    fn test_upper_below_lower_rejected_and_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        let result = regulator.set_upper_threshold(4);

        assert!(matches!(
            result,
            Err(RegulatorError::InvalidThreshold { lower: 5, upper: 4 })
        ));
        assert_eq!(regulator.upper_threshold(), 25);
        Ok(())
    }

    #[test]
    fn test_lower_above_upper_rejected_and_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        let result = regulator.set_lower_threshold(29);

        assert!(matches!(
            result,
            Err(RegulatorError::InvalidThreshold { lower: 29, upper: 25 })
        ));
        assert_eq!(regulator.lower_threshold(), 5);
        Ok(())
    }

    #[test]
    fn test_rejection_does_not_touch_devices() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::new();
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        assert!(regulator.set_upper_threshold(4).is_err());

        assert_eq!(sensor.read_count(), 0);
        assert_eq!(heater.total_commands(), 0);
        assert_eq!(window.total_commands(), 0);
        Ok(())
    }

    #[test]
    fn test_regulation_uses_updated_thresholds() -> Result<(), Box<dyn std::error::Error>> {
        let mut sensor = FakeTemperatureSensor::with_reading(26);
        let mut heater = FakeHeater::new();
        let mut window = FakeWindow::new();

        let mut regulator =
            Regulator::with_thresholds(&mut sensor, &mut heater, &mut window, 5, 25)?;
        regulator.set_upper_threshold(27)?;
        let action = regulator.regulate()?;

        // 26 was above the old band but sits inside the widened one.
        assert_eq!(action.window, WindowCommand::Closed);
        assert_eq!(window.close_count(), 1);
        Ok(())
    }
}
