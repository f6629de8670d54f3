/*
    Control Loop Task

    Fixed 50 ms period: drain button events, sample the IR sensor, run one
    robot tick, drive the indicator lines, then sleep for whatever is left.
*/

// Resources
use crate::resources::ARM_COUNT;
use crate::resources::BUTTON_EVENTS;
use crate::resources::MISSION;
use crate::resources::MOTOR_SETUPS;
use crate::resources::WHEEL_COUNT;
use crate::tasks::logger::TelemetryLogger;

// Library
use dc_robot::config::MAIN_TASK_PERIOD;
use dc_robot::config::TELEMETRY_EVERY_TICKS;
use dc_robot::resources::adc_to_millivolts;
use dc_robot::scheduler;
use dc_robot::ControlLoop;
use dc_robot::Drive;
use dc_robot::HBridge;
use dc_robot::Indicators;
use dc_robot::Outputs;
use dc_robot::SensorInputs;
use dc_robot::SetupError;
use dc_robot::SharedCount;
use embassy_rp::adc;
use embassy_rp::adc::Adc;
use embassy_rp::gpio::Input;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::PwmOutput;
use embassy_time::Instant;
use embassy_time::Timer;

pub type Motor = HBridge<PwmOutput<'static>>;
pub type Robot = ControlLoop<Motor, &'static SharedCount>;

/* --------------------------- Setup -------------------------- */
pub fn build_robot(wheel: Motor, arm: Motor) -> Result<Robot, SetupError> {
    let now = Instant::now();
    let [wheel_setup, arm_setup] = &MOTOR_SETUPS;

    let drives = [
        Drive::build(wheel_setup, wheel, &WHEEL_COUNT, now)?,
        Drive::build(arm_setup, arm, &ARM_COUNT, now)?,
    ];

    ControlLoop::new(MISSION, drives)
}

/* --------------------------- Board IO -------------------------- */
pub struct Board {
    indicators: Indicators<Output<'static>>,
    sensor_gate: Input<'static>,
    adc: Adc<'static, adc::Async>,
    ir: adc::Channel<'static>,
}

impl Board {
    pub fn new(
        indicators: Indicators<Output<'static>>,
        sensor_gate: Input<'static>,
        adc: Adc<'static, adc::Async>,
        ir: adc::Channel<'static>,
    ) -> Self {
        Self {
            indicators,
            sensor_gate,
            adc,
            ir,
        }
    }

    /// The IR sensor is only read while the robot runs and the gate is released.
    pub async fn sample(&mut self, active: bool) -> SensorInputs {
        if !active || self.sensor_gate.is_low() {
            return SensorInputs::default();
        }

        match self.adc.read(&mut self.ir).await {
            Ok(raw) => SensorInputs {
                distance_mv: Some(adc_to_millivolts(raw)),
            },
            Err(err) => {
                log::warn!("ir read failed: {:?}", err);
                SensorInputs::default()
            }
        }
    }

    pub fn show(&mut self, outputs: &Outputs) {
        // GPIO writes on the RP2040 cannot fail
        let _ = self.indicators.show(outputs);
    }
}

/* --------------------------- Task -------------------------- */
#[embassy_executor::task]
pub async fn control_loop_task(mut robot: Robot, mut board: Board) {
    let mut logger = TelemetryLogger::new(TELEMETRY_EVERY_TICKS);
    log::info!("mission {} ready, press the button to start", robot.mission().name);

    loop {
        let start = Instant::now();

        while let Ok(event) = BUTTON_EVENTS.try_receive() {
            robot.handle_button(event);
        }

        let inputs = board.sample(robot.is_active()).await;
        let outputs = robot.tick(inputs, start);
        board.show(&outputs);
        logger.report(&robot);

        Timer::after(scheduler::remaining(MAIN_TASK_PERIOD, start.elapsed())).await;
    }
}
