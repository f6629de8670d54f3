/*
    Open-Loop Drive

    Fixed voltage, no feedback. The encoder is only read for diagnostics.
*/

use super::limit;
use super::SpeedEstimator;
use crate::config::ControllerConfig;
use crate::resources::Actuator;
use crate::resources::PulseCounter;
use embassy_time::Instant;

pub struct OpenLoop<A, E> {
    config: ControllerConfig,
    actuator: A,
    encoder: E,
    estimator: SpeedEstimator,
    voltage: f32,
}

impl<A: Actuator, E: PulseCounter> OpenLoop<A, E> {
    pub fn new(config: ControllerConfig, actuator: A, encoder: E, now: Instant) -> Self {
        let count = encoder.count();

        Self {
            config,
            actuator,
            encoder,
            estimator: SpeedEstimator::new(config.counts_per_revolution(), count, now),
            voltage: 0.0,
        }
    }

    /// Non-finite voltages are ignored.
    pub fn set_voltage(&mut self, voltage: f32) {
        if !voltage.is_finite() {
            return;
        }
        self.voltage = limit(voltage, self.config.max_voltage());
    }

    pub fn update(&mut self, now: Instant) {
        self.estimator.sample(self.encoder.count(), now);
        self.actuator.apply(self.voltage / self.config.max_voltage());
    }

    pub fn reset(&mut self, now: Instant) {
        self.voltage = 0.0;
        self.estimator.rebase(self.encoder.count(), now);
        self.actuator.apply(0.0);
    }

    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    pub fn count(&self) -> i32 {
        self.encoder.count()
    }

    pub fn speed_rps(&self) -> f32 {
        self.estimator.speed_rps()
    }

    pub fn rotation(&self) -> f32 {
        self.encoder.count() as f32 / self.config.counts_per_revolution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::fake::RecordingActuator;
    use crate::resources::SharedCount;

    #[test]
    fn voltage_is_normalized_and_clamped() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let config = ControllerConfig::new(2000.0, 11.67, 12.0, 0.0).unwrap();
        let mut drive = OpenLoop::new(config, actuator.clone(), &encoder, Instant::from_millis(0));

        drive.set_voltage(6.0);
        drive.update(Instant::from_millis(50));
        assert_eq!(actuator.last.get(), Some(0.5));

        drive.set_voltage(-30.0);
        drive.update(Instant::from_millis(100));
        assert_eq!(drive.voltage(), -12.0);
        assert_eq!(actuator.last.get(), Some(-1.0));
    }

    #[test]
    fn non_finite_voltage_is_ignored() {
        let encoder = SharedCount::new();
        let actuator = RecordingActuator::default();
        let config = ControllerConfig::new(2000.0, 11.67, 12.0, 0.0).unwrap();
        let mut drive = OpenLoop::new(config, actuator.clone(), &encoder, Instant::from_millis(0));

        drive.set_voltage(3.0);
        drive.set_voltage(f32::NAN);
        drive.set_voltage(f32::INFINITY);
        drive.update(Instant::from_millis(50));

        assert_eq!(drive.voltage(), 3.0);
        assert_eq!(actuator.last.get(), Some(0.25));
    }

    #[test]
    fn encoder_is_tracked_for_diagnostics() {
        let encoder = SharedCount::new();
        let config = ControllerConfig::new(2000.0, 11.67, 12.0, 0.0).unwrap();
        let mut drive = OpenLoop::new(config, RecordingActuator::default(), &encoder, Instant::from_millis(0));

        encoder.store(500);
        drive.update(Instant::from_millis(250));

        assert_eq!(drive.count(), 500);
        assert!((drive.rotation() - 0.25).abs() < 1e-6);
        assert!((drive.speed_rps() - 1.0).abs() < 1e-5);
    }
}
