#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use dc_robot::control::PositionController;
use dc_robot::Actuator;
use dc_robot::ControlLoop;
use dc_robot::ControlMode;
use dc_robot::Drive;
use dc_robot::MotorId;
use dc_robot::MotorParams;
use dc_robot::MotorSetup;
use dc_robot::SharedCount;
use embassy_time::Instant;

/// Keeps the last command visible after the actuator moved into a drive.
/// Mirrors `resources::fake::RecordingActuator`, which is only built for unit
/// tests. Keep the two in step.
#[derive(Clone, Default)]
pub struct RecordingActuator {
    pub last: Rc<Cell<Option<f32>>>,
}

impl Actuator for RecordingActuator {
    fn apply(&mut self, command: f32) {
        self.last.set(Some(command));
    }
}

pub type TestLoop<'a> = ControlLoop<RecordingActuator, &'a SharedCount>;

pub const PERIOD_MS: u64 = 50;

pub fn at(tick: u64) -> Instant {
    Instant::from_millis(tick * PERIOD_MS)
}

/// 1000 counts per revolution keeps encoder arithmetic readable.
pub const ROUND_PARAMS: MotorParams = MotorParams {
    counts_per_revolution: 1000.0,
    speed_constant_rpm_per_volt: 12.0,
    max_voltage: 12.0,
    kp: 0.1,
};

pub fn setup(mode: ControlMode) -> MotorSetup {
    MotorSetup { mode, params: ROUND_PARAMS }
}

pub fn drive<'a>(mode: ControlMode, encoder: &'a SharedCount) -> Drive<RecordingActuator, &'a SharedCount> {
    Drive::build(&setup(mode), RecordingActuator::default(), encoder, at(0)).unwrap()
}

pub fn position<'a, 'b>(
    robot: &'b TestLoop<'a>,
    motor: MotorId,
) -> &'b PositionController<RecordingActuator, &'a SharedCount> {
    match robot.drive(motor) {
        Some(Drive::Position(drive)) => drive,
        _ => panic!("{:?} is not a position drive", motor),
    }
}
