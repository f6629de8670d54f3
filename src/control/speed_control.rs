/*
    Speed Controller

    Feed-forward from the motor speed constant plus proportional feedback
    on the measured speed. The setpoint the law acts on is slew limited
    toward the desired speed so torque demand never steps.
*/

use super::limit;
use super::SpeedEstimator;
use crate::config::ControllerConfig;
use crate::config::DEFAULT_RAMP_TIME_S;
use crate::resources::Actuator;
use crate::resources::PulseCounter;
use embassy_time::Instant;
use libm::fabsf;

/* --------------------------- Code -------------------------- */
pub struct SpeedController<A, E> {
    config: ControllerConfig,
    actuator: A,
    encoder: E,
    estimator: SpeedEstimator,
    desired_speed: f32,
    setpoint: f32,
    max_acceleration: f32,
    voltage: f32,
}

impl<A: Actuator, E: PulseCounter> SpeedController<A, E> {
    pub fn new(config: ControllerConfig, actuator: A, encoder: E, now: Instant) -> Self {
        let count = encoder.count();

        Self {
            config,
            actuator,
            encoder,
            estimator: SpeedEstimator::new(config.counts_per_revolution(), count, now),
            desired_speed: 0.0,
            setpoint: 0.0,
            max_acceleration: config.max_speed_rps() / DEFAULT_RAMP_TIME_S,
            voltage: 0.0,
        }
    }

    /// Target speed in rev/s, saturated at what the supply can reach.
    /// Non-finite targets are ignored.
    pub fn set_desired_speed(&mut self, rps: f32) {
        if !rps.is_finite() {
            return;
        }
        self.desired_speed = limit(rps, self.config.max_speed_rps());
    }

    pub fn set_desired_speed_rpm(&mut self, rpm: f32) {
        self.set_desired_speed(rpm / 60.0);
    }

    /// Ramp limit in rev/s². NaN is ignored.
    pub fn set_max_acceleration(&mut self, rps_per_s: f32) {
        if !rps_per_s.is_nan() {
            self.max_acceleration = fabsf(rps_per_s);
        }
    }

    pub fn set_max_acceleration_rpm(&mut self, rpm_per_s: f32) {
        self.set_max_acceleration(rpm_per_s / 60.0);
    }

    pub fn update(&mut self, now: Instant) {
        let count = self.encoder.count();
        let Some(dt) = self.estimator.sample(count, now) else {
            return;
        };

        let step = self.max_acceleration * dt;
        self.setpoint += limit(self.desired_speed - self.setpoint, step);

        let error = self.setpoint - self.estimator.speed_rps();
        let voltage = self.setpoint / self.config.rps_per_volt() + self.config.kp() * error;

        let max_voltage = self.config.max_voltage();
        self.voltage = limit(voltage, max_voltage);
        self.actuator.apply(self.voltage / max_voltage);
    }

    /// Zero speed, zero ramp, encoder re-baselined at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.desired_speed = 0.0;
        self.setpoint = 0.0;
        self.voltage = 0.0;
        self.estimator.rebase(self.encoder.count(), now);
        self.actuator.apply(0.0);
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn count(&self) -> i32 {
        self.encoder.count()
    }

    pub fn speed_rps(&self) -> f32 {
        self.estimator.speed_rps()
    }

    pub fn speed_rpm(&self) -> f32 {
        self.estimator.speed_rps() * 60.0
    }

    pub fn desired_speed(&self) -> f32 {
        self.desired_speed
    }

    pub fn setpoint(&self) -> f32 {
        self.setpoint
    }

    pub fn max_acceleration(&self) -> f32 {
        self.max_acceleration
    }

    pub fn voltage(&self) -> f32 {
        self.voltage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::fake::RecordingActuator;
    use crate::resources::SharedCount;

    fn scenario_config(kp: f32) -> ControllerConfig {
        ControllerConfig::new(2000.0, 11.67, 12.0, kp).unwrap()
    }

    #[test]
    fn first_tick_matches_feed_forward() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let mut speed = SpeedController::new(scenario_config(0.0), actuator.clone(), &encoder, Instant::from_millis(0));
        speed.set_max_acceleration(4.0);
        speed.set_desired_speed(0.5);

        speed.update(Instant::from_millis(50));

        let ramped = f32::min(0.5, 4.0 * 0.05);
        assert!((speed.setpoint() - ramped).abs() < 1e-6);
        let expected = ramped / (11.67 / 60.0);
        assert!((speed.voltage() - expected).abs() < 1e-4);
        let applied = actuator.last.get().unwrap();
        assert!((applied - expected / 12.0).abs() < 1e-5);
    }

    #[test]
    fn ramp_converges_without_overshoot() {
        let encoder = SharedCount::new();
        let mut speed = SpeedController::new(scenario_config(0.1), RecordingActuator::default(), &encoder, Instant::from_millis(0));
        speed.set_max_acceleration(1.5);
        speed.set_desired_speed(0.5);

        let mut previous = 0.0;
        for tick in 1..=40u64 {
            speed.update(Instant::from_millis(tick * 50));
            let step = speed.setpoint() - previous;
            assert!(step >= 0.0);
            assert!(step <= 1.5 * 0.05 + 1e-6);
            assert!(speed.setpoint() <= 0.5);
            previous = speed.setpoint();
        }
        assert!((speed.setpoint() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ramp_down_toward_negative_speed() {
        let encoder = SharedCount::new();
        let mut speed = SpeedController::new(scenario_config(0.0), RecordingActuator::default(), &encoder, Instant::from_millis(0));
        speed.set_max_acceleration(-2.0);
        speed.set_desired_speed(-0.3);

        speed.update(Instant::from_millis(50));
        assert!((speed.setpoint() + 0.1).abs() < 1e-6);
        speed.update(Instant::from_millis(100));
        speed.update(Instant::from_millis(150));
        speed.update(Instant::from_millis(200));
        assert!((speed.setpoint() + 0.3).abs() < 1e-6);
    }

    #[test]
    fn zero_elapsed_time_keeps_voltage() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let mut speed = SpeedController::new(scenario_config(0.1), actuator.clone(), &encoder, Instant::from_millis(0));
        speed.set_desired_speed(1.0);
        speed.update(Instant::from_millis(50));
        let voltage = speed.voltage();
        let setpoint = speed.setpoint();

        encoder.store(5000);
        actuator.last.set(None);
        speed.update(Instant::from_millis(50));

        assert_eq!(speed.voltage(), voltage);
        assert_eq!(speed.setpoint(), setpoint);
        assert_eq!(actuator.last.get(), None);
    }

    #[test]
    fn voltage_stays_within_ceiling() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let mut speed = SpeedController::new(scenario_config(50.0), actuator.clone(), &encoder, Instant::from_millis(0));
        speed.set_max_acceleration(100.0);
        speed.set_desired_speed(2.0);

        // Encoder running hard backwards makes the feedback error huge
        for tick in 1..=10i32 {
            encoder.store(-tick * 10_000);
            speed.update(Instant::from_millis(tick as u64 * 50));
            assert!(speed.voltage() <= 12.0 && speed.voltage() >= -12.0);
            let applied = actuator.last.get().unwrap();
            assert!(applied <= 1.0 && applied >= -1.0);
        }
        assert_eq!(speed.voltage(), 12.0);
    }

    #[test]
    fn desired_speed_is_clamped_to_supply() {
        let encoder = SharedCount::new();
        let mut speed = SpeedController::new(scenario_config(0.0), RecordingActuator::default(), &encoder, Instant::from_millis(0));
        speed.set_desired_speed(100.0);
        let ceiling = 11.67 / 60.0 * 12.0;
        assert!((speed.desired_speed() - ceiling).abs() < 1e-5);
        speed.set_desired_speed_rpm(-6000.0);
        assert!((speed.desired_speed() + ceiling).abs() < 1e-5);
    }

    #[test]
    fn non_finite_target_is_ignored() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let mut speed = SpeedController::new(scenario_config(0.1), actuator.clone(), &encoder, Instant::from_millis(0));
        speed.set_max_acceleration(4.0);
        speed.set_desired_speed(0.5);
        speed.set_desired_speed(f32::NAN);
        speed.set_desired_speed(f32::INFINITY);
        assert_eq!(speed.desired_speed(), 0.5);

        for tick in 1..=10u64 {
            speed.update(Instant::from_millis(tick * 50));
            assert!(speed.voltage().is_finite());
            assert!(speed.voltage() <= 12.0 && speed.voltage() >= -12.0);
            assert!(actuator.last.get().unwrap().is_finite());
        }
        assert!((speed.setpoint() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reset_zeroes_setpoints_and_output() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let mut speed = SpeedController::new(scenario_config(0.1), actuator.clone(), &encoder, Instant::from_millis(0));
        speed.set_desired_speed(1.0);
        encoder.store(400);
        speed.update(Instant::from_millis(50));

        speed.reset(Instant::from_millis(60));

        assert_eq!(speed.desired_speed(), 0.0);
        assert_eq!(speed.setpoint(), 0.0);
        assert_eq!(speed.voltage(), 0.0);
        assert_eq!(speed.speed_rps(), 0.0);
        assert_eq!(actuator.last.get(), Some(0.0));

        // New baseline: no motion since reset means no measured speed
        speed.update(Instant::from_millis(110));
        assert_eq!(speed.speed_rps(), 0.0);
    }
}
