/*
    Position Controller

    Proportional outer loop on rotation cascaded onto the speed loop. The
    outer loop only produces a velocity setpoint; ramping and actuation
    are left to the inner SpeedController.
*/

use super::limit;
use super::SpeedController;
use crate::config::ControllerConfig;
use crate::config::DEFAULT_POSITION_GAIN;
use crate::resources::Actuator;
use crate::resources::PulseCounter;
use embassy_time::Instant;
use libm::fabsf;

/* --------------------------- Target Status -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TargetStatus {
    Approaching,
    Reached,
    Overshot,
}

/* --------------------------- Code -------------------------- */
pub struct PositionController<A, E> {
    speed: SpeedController<A, E>,
    desired_rotation: f32,
    move_origin: f32,
    max_velocity: f32,
    gain: f32,
    velocity_setpoint: f32,
}

impl<A: Actuator, E: PulseCounter> PositionController<A, E> {
    pub fn new(config: ControllerConfig, actuator: A, encoder: E, now: Instant) -> Self {
        let speed = SpeedController::new(config, actuator, encoder, now);
        let rotation = speed.count() as f32 / config.counts_per_revolution();

        Self {
            speed,
            desired_rotation: 0.0,
            move_origin: rotation,
            max_velocity: config.max_speed_rps(),
            gain: DEFAULT_POSITION_GAIN,
            velocity_setpoint: 0.0,
        }
    }

    /// Absolute target in revolutions from the zero reference. Non-finite
    /// targets are ignored.
    pub fn set_desired_rotation(&mut self, revolutions: f32) {
        if !revolutions.is_finite() {
            return;
        }
        self.move_origin = self.rotation();
        self.desired_rotation = revolutions;
    }

    /// Velocity ceiling in rev/s, saturated at what the supply can reach.
    pub fn set_max_velocity(&mut self, rps: f32) {
        let ceiling = self.speed.config().max_speed_rps();
        if !rps.is_nan() {
            self.max_velocity = fabsf(rps).min(ceiling);
        }
    }

    pub fn set_max_velocity_rpm(&mut self, rpm: f32) {
        self.set_max_velocity(rpm / 60.0);
    }

    pub fn set_max_acceleration(&mut self, rps_per_s: f32) {
        self.speed.set_max_acceleration(rps_per_s);
    }

    pub fn set_max_acceleration_rpm(&mut self, rpm_per_s: f32) {
        self.speed.set_max_acceleration_rpm(rpm_per_s);
    }

    /// Outer loop gain in (rev/s) per revolution of error.
    pub fn set_gain(&mut self, gain: f32) {
        if !gain.is_nan() {
            self.gain = fabsf(gain);
        }
    }

    /// Stop where the shaft is now.
    pub fn hold(&mut self) {
        self.set_desired_rotation(self.rotation());
    }

    pub fn update(&mut self, now: Instant) {
        let error = self.desired_rotation - self.rotation();
        self.velocity_setpoint = limit(self.gain * error, self.max_velocity);

        self.speed.set_desired_speed(self.velocity_setpoint);
        self.speed.update(now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.desired_rotation = 0.0;
        self.move_origin = self.rotation();
        self.velocity_setpoint = 0.0;
        self.speed.reset(now);
    }

    pub fn rotation(&self) -> f32 {
        self.speed.count() as f32 / self.speed.config().counts_per_revolution()
    }

    /// Where the shaft is relative to the target, within `tolerance` revolutions.
    /// Overshot means the shaft went past the target as seen from where the
    /// current move started.
    pub fn target_status(&self, tolerance: f32) -> TargetStatus {
        let error = self.desired_rotation - self.rotation();
        if fabsf(error) <= fabsf(tolerance) {
            return TargetStatus::Reached;
        }

        let travel = self.desired_rotation - self.move_origin;
        if travel * error < 0.0 {
            return TargetStatus::Overshot;
        }

        TargetStatus::Approaching
    }

    pub fn desired_rotation(&self) -> f32 {
        self.desired_rotation
    }

    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    pub fn velocity_setpoint(&self) -> f32 {
        self.velocity_setpoint
    }

    pub fn speed_controller(&self) -> &SpeedController<A, E> {
        &self.speed
    }
}
