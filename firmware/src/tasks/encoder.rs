/*
    Encoder Task

    Counts quadrature steps from the PIO decoder into a shared counter, the
    control loop reads it once per tick.
*/

// Library
use dc_robot::SharedCount;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::rotary_encoder::Direction;
use embassy_rp::pio_programs::rotary_encoder::PioEncoder;

/* --------------------------- Code -------------------------- */
pub struct RotaryEncoder<'d, T: Instance, const SM: usize> {
    encoder: PioEncoder<'d, T, SM>,
    count: &'static SharedCount,
}

impl<'d, T: Instance, const SM: usize> RotaryEncoder<'d, T, SM> {
    pub fn new(encoder: PioEncoder<'d, T, SM>, count: &'static SharedCount) -> Self {
        Self { encoder, count }
    }

    pub async fn run_encoder_task(&mut self) -> ! {
        loop {
            match self.encoder.read().await {
                Direction::Clockwise => self.count.step(true),
                Direction::CounterClockwise => self.count.step(false),
            }
        }
    }
}

#[embassy_executor::task]
pub async fn wheel_encoder_task(mut encoder: RotaryEncoder<'static, PIO0, 0>) {
    encoder.run_encoder_task().await;
}

#[embassy_executor::task]
pub async fn arm_encoder_task(mut encoder: RotaryEncoder<'static, PIO0, 1>) {
    encoder.run_encoder_task().await;
}
