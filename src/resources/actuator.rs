/*
    Actuator Resources

    Motor outputs take a normalized command in [-1, 1]: the fraction of the
    supply voltage to apply, sign selecting the direction.
*/

use embedded_hal::pwm::SetDutyCycle;
use libm::fabsf;

/* --------------------------- Actuator -------------------------- */
pub trait Actuator {
    fn apply(&mut self, command: f32);
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    fn apply(&mut self, command: f32) {
        (**self).apply(command);
    }
}

/* --------------------------- H-Bridge -------------------------- */
/// Two PWM channels driving one motor, one per direction.
pub struct HBridge<P> {
    pwm_cw: P,
    pwm_ccw: P,
}

impl<P: SetDutyCycle> HBridge<P> {
    pub fn new(pwm_cw: P, pwm_ccw: P) -> Self {
        Self { pwm_cw, pwm_ccw }
    }

    pub fn release(self) -> (P, P) {
        (self.pwm_cw, self.pwm_ccw)
    }
}

impl<P: SetDutyCycle> Actuator for HBridge<P> {
    fn apply(&mut self, command: f32) {
        let command = command.clamp(-1.0, 1.0);
        let duty = (fabsf(command) * self.pwm_cw.max_duty_cycle() as f32) as u16;

        let result = if command > 0.0 {
            self.pwm_cw
                .set_duty_cycle(duty)
                .and_then(|_| self.pwm_ccw.set_duty_cycle_fully_off())
        } else {
            self.pwm_cw
                .set_duty_cycle_fully_off()
                .and_then(|_| self.pwm_ccw.set_duty_cycle(duty))
        };

        if let Err(err) = result {
            log::warn!("pwm write failed: {:?}", err);
        }
    }
}
