/*
    Indicator Outputs
*/

use crate::robot::Outputs;
use embedded_hal::digital::OutputPin;
use embedded_hal::digital::PinState;

pub struct Indicators<P> {
    heartbeat: P,
    status: P,
    enable_motors: P,
}

impl<P: OutputPin> Indicators<P> {
    pub fn new(heartbeat: P, status: P, enable_motors: P) -> Self {
        Self {
            heartbeat,
            status,
            enable_motors,
        }
    }

    /// Writes every line, enable first so motors are gated before anything else.
    pub fn show(&mut self, outputs: &Outputs) -> Result<(), P::Error> {
        self.enable_motors.set_state(PinState::from(outputs.motors_enabled))?;
        self.status.set_state(PinState::from(outputs.status))?;
        self.heartbeat.set_state(PinState::from(outputs.heartbeat))?;
        Ok(())
    }

    pub fn release(self) -> (P, P, P) {
        (self.heartbeat, self.status, self.enable_motors)
    }
}
