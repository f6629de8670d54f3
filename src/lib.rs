#![cfg_attr(not(test), no_std)]

// Mod
pub mod config;
pub mod error;
pub mod control;
pub mod resources;
pub mod robot;
pub mod scheduler;

pub use config::ControllerConfig;
pub use config::MotorParams;
pub use error::ConfigError;
pub use error::SetupError;
pub use control::Drive;
pub use control::MotorSetup;
pub use control::ControlMode;
pub use control::SpeedController;
pub use control::PositionController;
pub use control::OpenLoop;
pub use control::TargetStatus;
pub use resources::Actuator;
pub use resources::PulseCounter;
pub use resources::SharedCount;
pub use resources::HBridge;
pub use resources::Indicators;
pub use robot::ControlLoop;
pub use robot::MotorId;
pub use robot::RobotState;
pub use robot::ButtonEvent;
pub use robot::SensorInputs;
pub use robot::Outputs;
