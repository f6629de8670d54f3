/*
    Drive

    One motor slot of the robot, in whichever control mode it was built.
*/

use super::OpenLoop;
use super::PositionController;
use super::SpeedController;
use crate::config::MotorParams;
use crate::error::ConfigError;
use crate::resources::Actuator;
use crate::resources::PulseCounter;
use embassy_time::Instant;

/* --------------------------- Mode -------------------------- */
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    OpenLoop,
    Speed,
    Position,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorSetup {
    pub mode: ControlMode,
    pub params: MotorParams,
}

/* --------------------------- Code -------------------------- */
pub enum Drive<A, E> {
    OpenLoop(OpenLoop<A, E>),
    Speed(SpeedController<A, E>),
    Position(PositionController<A, E>),
}

impl<A: Actuator, E: PulseCounter> Drive<A, E> {
    pub fn build(setup: &MotorSetup, actuator: A, encoder: E, now: Instant) -> Result<Self, ConfigError> {
        let config = setup.params.validate()?;

        let drive = match setup.mode {
            ControlMode::OpenLoop => Drive::OpenLoop(OpenLoop::new(config, actuator, encoder, now)),
            ControlMode::Speed => Drive::Speed(SpeedController::new(config, actuator, encoder, now)),
            ControlMode::Position => Drive::Position(PositionController::new(config, actuator, encoder, now)),
        };

        Ok(drive)
    }

    pub fn mode(&self) -> ControlMode {
        match self {
            Drive::OpenLoop(_) => ControlMode::OpenLoop,
            Drive::Speed(_) => ControlMode::Speed,
            Drive::Position(_) => ControlMode::Position,
        }
    }

    pub fn update(&mut self, now: Instant) {
        match self {
            Drive::OpenLoop(drive) => drive.update(now),
            Drive::Speed(drive) => drive.update(now),
            Drive::Position(drive) => drive.update(now),
        }
    }

    pub fn reset(&mut self, now: Instant) {
        match self {
            Drive::OpenLoop(drive) => drive.reset(now),
            Drive::Speed(drive) => drive.reset(now),
            Drive::Position(drive) => drive.reset(now),
        }
    }

    pub fn count(&self) -> i32 {
        match self {
            Drive::OpenLoop(drive) => drive.count(),
            Drive::Speed(drive) => drive.count(),
            Drive::Position(drive) => drive.speed_controller().count(),
        }
    }

    pub fn speed_rps(&self) -> f32 {
        match self {
            Drive::OpenLoop(drive) => drive.speed_rps(),
            Drive::Speed(drive) => drive.speed_rps(),
            Drive::Position(drive) => drive.speed_controller().speed_rps(),
        }
    }

    pub fn rotation(&self) -> f32 {
        match self {
            Drive::OpenLoop(drive) => drive.rotation(),
            Drive::Speed(drive) => drive.count() as f32 / drive.config().counts_per_revolution(),
            Drive::Position(drive) => drive.rotation(),
        }
    }
}
