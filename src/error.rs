/*
    Construction Errors

    Runtime faults never surface as errors: bad timing is skipped and
    out-of-range setpoints are clamped. Only wiring and parameters are
    rejected, once, before the loop starts.
*/

use core::fmt;

use crate::control::ControlMode;
use crate::robot::MotorId;
use crate::robot::RobotState;

/* --------------------------- Config -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    CountsPerRevolution,
    SpeedConstant,
    MaxVoltage,
    Gain,
    GearRatio,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CountsPerRevolution => f.write_str("counts per revolution must be positive"),
            ConfigError::SpeedConstant => f.write_str("speed constant must be positive"),
            ConfigError::MaxVoltage => f.write_str("voltage ceiling must be positive"),
            ConfigError::Gain => f.write_str("gain must be finite and non-negative"),
            ConfigError::GearRatio => f.write_str("gear ratio must be positive"),
        }
    }
}

/* --------------------------- Setup -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    Config(ConfigError),
    TooManyMotors,
    MissingInitStage,
    DuplicateStage(RobotState),
    UnknownStage { from: RobotState, to: RobotState },
    UnknownMotor { state: RobotState, motor: MotorId },
    ModeMismatch { state: RobotState, motor: MotorId, expected: ControlMode },
    TooManyTriggers(RobotState),
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Config(err) => write!(f, "invalid motor config: {}", err),
            SetupError::TooManyMotors => f.write_str("more motors than drive slots"),
            SetupError::MissingInitStage => f.write_str("mission has no Init stage"),
            SetupError::DuplicateStage(state) => write!(f, "stage {:?} listed twice", state),
            SetupError::UnknownStage { from, to } => {
                write!(f, "stage {:?} exits to {:?} which is not in the mission", from, to)
            }
            SetupError::UnknownMotor { state, motor } => {
                write!(f, "stage {:?} refers to missing motor {:?}", state, motor)
            }
            SetupError::ModeMismatch { state, motor, expected } => {
                write!(f, "stage {:?} needs motor {:?} in {:?} mode", state, motor, expected)
            }
            SetupError::TooManyTriggers(state) => write!(f, "stage {:?} has too many triggers", state),
        }
    }
}
