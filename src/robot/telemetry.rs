/*
    Telemetry

    One advisory text line per report, nothing reads it back.
*/

use core::fmt;
use core::fmt::Write;

use heapless::String;
use heapless::Vec;

use crate::config::MAX_MOTORS;
use crate::robot::MotorId;
use crate::robot::RobotState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorReport {
    pub motor: MotorId,
    pub count: i32,
    pub speed_rps: f32,
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Telemetry {
    pub tick: u32,
    pub state: RobotState,
    pub distance_mv: f32,
    pub motors: Vec<MotorReport, MAX_MOTORS>,
}

impl Telemetry {
    /// Renders into `buffer`, replacing its contents. Fails if the line does
    /// not fit.
    pub fn write_to_buffer<const N: usize>(&self, buffer: &mut String<N>) -> fmt::Result {
        buffer.clear();
        write!(buffer, "{}", self)
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {} state {:?} ir {:.0} mV", self.tick, self.state, self.distance_mv)?;

        for report in &self.motors {
            write!(
                f,
                " | {:?} cnt {} spd {:.3} rps rot {:.3}",
                report.motor, report.count, report.speed_rps, report.rotation
            )?;
        }

        Ok(())
    }
}
