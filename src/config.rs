/*
*  Default Control Config
*
*  All tuning is fixed at start. Per-motor parameters are validated once
*  into a ControllerConfig before any controller is built.
*/

use crate::error::ConfigError;
use embassy_time::Duration;

/* --------------------------- Loop Timing -------------------------- */
pub const MAIN_TASK_PERIOD_MS: u64 = 50;
pub const MAIN_TASK_PERIOD: Duration = Duration::from_millis(MAIN_TASK_PERIOD_MS);
pub const TELEMETRY_EVERY_TICKS: u32 = 10; // 500 ms at the default period

/* --------------------------- Drives -------------------------- */
pub const MAX_MOTORS: usize = 3;
pub const DEFAULT_POSITION_GAIN: f32 = 4.0; // (rev/s) per rev of error
pub const DEFAULT_RAMP_TIME_S: f32 = 1.0; // Time to ramp from rest to full speed

/* --------------------------- IR Sensor -------------------------- */
pub const IR_REFERENCE_MV: f32 = 3300.0;
pub const ADC_FULL_SCALE: u16 = 4095; // 12 bit

/* --------------------------- Motor Presets -------------------------- */
// 20 counts per motor turn, 100:1 gearbox, 140 RPM at 12 V
pub const DRIVE_MOTOR_100_1: MotorParams = MotorParams {
    counts_per_revolution: 20.0 * 100.0,
    speed_constant_rpm_per_volt: 140.0 / 12.0,
    max_voltage: 12.0,
    kp: 0.1,
};

// 20 counts per motor turn, 488.28125:1 gearbox, 28 RPM at 12 V
pub const ARM_MOTOR_488_1: MotorParams = MotorParams {
    counts_per_revolution: 20.0 * 488.28125,
    speed_constant_rpm_per_volt: 28.0 / 12.0,
    max_voltage: 12.0,
    kp: 0.1,
};

/* --------------------------- Params -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorParams {
    pub counts_per_revolution: f32,
    pub speed_constant_rpm_per_volt: f32,
    pub max_voltage: f32,
    pub kp: f32,
}

impl MotorParams {
    pub fn validate(&self) -> Result<ControllerConfig, ConfigError> {
        ControllerConfig::new(
            self.counts_per_revolution,
            self.speed_constant_rpm_per_volt,
            self.max_voltage,
            self.kp,
        )
    }
}

/// Immutable per-motor parameters, checked at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    counts_per_revolution: f32,
    speed_constant_rpm_per_volt: f32,
    max_voltage: f32,
    kp: f32,
}

impl ControllerConfig {
    pub fn new(
        counts_per_revolution: f32,
        speed_constant_rpm_per_volt: f32,
        max_voltage: f32,
        kp: f32,
    ) -> Result<Self, ConfigError> {
        // Negated comparisons also reject NaN
        if !(counts_per_revolution > 0.0) || !counts_per_revolution.is_finite() {
            return Err(ConfigError::CountsPerRevolution);
        }
        if !(speed_constant_rpm_per_volt > 0.0) || !speed_constant_rpm_per_volt.is_finite() {
            return Err(ConfigError::SpeedConstant);
        }
        if !(max_voltage > 0.0) || !max_voltage.is_finite() {
            return Err(ConfigError::MaxVoltage);
        }
        if !(kp >= 0.0) || !kp.is_finite() {
            return Err(ConfigError::Gain);
        }

        Ok(Self {
            counts_per_revolution,
            speed_constant_rpm_per_volt,
            max_voltage,
            kp,
        })
    }

    /// Config for a motor behind an extra gearbox: counts are taken at the
    /// motor shaft, speed constant is the bare motor's.
    pub fn geared(
        encoder_counts: f32,
        gear_ratio: f32,
        motor_speed_constant_rpm_per_volt: f32,
        max_voltage: f32,
        kp: f32,
    ) -> Result<Self, ConfigError> {
        if !(gear_ratio > 0.0) || !gear_ratio.is_finite() {
            return Err(ConfigError::GearRatio);
        }

        Self::new(
            encoder_counts * gear_ratio,
            motor_speed_constant_rpm_per_volt / gear_ratio,
            max_voltage,
            kp,
        )
    }

    pub fn counts_per_revolution(&self) -> f32 {
        self.counts_per_revolution
    }

    pub fn speed_constant_rpm_per_volt(&self) -> f32 {
        self.speed_constant_rpm_per_volt
    }

    pub fn max_voltage(&self) -> f32 {
        self.max_voltage
    }

    pub fn kp(&self) -> f32 {
        self.kp
    }

    pub fn rps_per_volt(&self) -> f32 {
        self.speed_constant_rpm_per_volt / 60.0
    }

    /// Highest reachable output speed in rev/s.
    pub fn max_speed_rps(&self) -> f32 {
        self.rps_per_volt() * self.max_voltage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(DRIVE_MOTOR_100_1.validate().is_ok());
        assert!(ARM_MOTOR_488_1.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_counts() {
        assert_eq!(ControllerConfig::new(0.0, 11.67, 12.0, 0.1), Err(ConfigError::CountsPerRevolution));
        assert_eq!(ControllerConfig::new(-2000.0, 11.67, 12.0, 0.1), Err(ConfigError::CountsPerRevolution));
        assert_eq!(ControllerConfig::new(f32::NAN, 11.67, 12.0, 0.1), Err(ConfigError::CountsPerRevolution));
    }

    #[test]
    fn rejects_non_positive_voltage_and_speed_constant() {
        assert_eq!(ControllerConfig::new(2000.0, 11.67, 0.0, 0.1), Err(ConfigError::MaxVoltage));
        assert_eq!(ControllerConfig::new(2000.0, 0.0, 12.0, 0.1), Err(ConfigError::SpeedConstant));
        assert_eq!(ControllerConfig::new(2000.0, 11.67, 12.0, -0.1), Err(ConfigError::Gain));
    }

    #[test]
    fn geared_config_scales_counts_and_speed() {
        let config = ControllerConfig::geared(20.0, 100.0, 1400.0, 12.0, 0.1).unwrap();
        assert_eq!(config.counts_per_revolution(), 2000.0);
        assert!((config.speed_constant_rpm_per_volt() - 14.0).abs() < 1e-5);
        assert_eq!(ControllerConfig::geared(20.0, 0.0, 1400.0, 12.0, 0.1), Err(ConfigError::GearRatio));
    }

    #[test]
    fn max_speed_follows_voltage_ceiling() {
        let config = ControllerConfig::new(2000.0, 12.0, 12.0, 0.0).unwrap();
        assert!((config.rps_per_volt() - 0.2).abs() < 1e-6);
        assert!((config.max_speed_rps() - 2.4).abs() < 1e-5);
    }
}
