/*
* Logger Task
*/

// Resources
use crate::resources::LOG_LINE_SIZE;

// Library
use dc_robot::Actuator;
use dc_robot::ControlLoop;
use dc_robot::PulseCounter;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use heapless::String;

/* --------------------------- Code -------------------------- */
/// Formats a telemetry line every `every` ticks and hands it to `log`.
pub struct TelemetryLogger {
    every: u32,
    buffer: String<LOG_LINE_SIZE>,
}

impl TelemetryLogger {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            buffer: String::new(),
        }
    }

    pub fn report<A: Actuator, E: PulseCounter>(&mut self, robot: &ControlLoop<A, E>) {
        if robot.ticks() % self.every != 0 {
            return;
        }

        match robot.telemetry().write_to_buffer(&mut self.buffer) {
            Ok(()) => log::info!("{}", self.buffer),
            Err(_) => log::warn!("telemetry line exceeds {} bytes", LOG_LINE_SIZE),
        }
    }
}

#[embassy_executor::task]
pub async fn usb_logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Debug, driver);
}
