#![no_std]
#![no_main]

// Mod
mod tasks;
mod resources;

// Resources
use crate::resources::Irqs;
use crate::resources::AssignedResources;
use crate::resources::WheelResources;
use crate::resources::ArmResources;
use crate::resources::InputResources;
use crate::resources::IndicatorResources;
use crate::resources::ARM_COUNT;
use crate::resources::PWM_PERIOD_TICKS;
use crate::resources::WHEEL_COUNT;

// Tasks
use crate::tasks::button::button_task;
use crate::tasks::control_loop::build_robot;
use crate::tasks::control_loop::control_loop_task;
use crate::tasks::control_loop::Board;
use crate::tasks::control_loop::Motor;
use crate::tasks::encoder::RotaryEncoder;
use crate::tasks::encoder::arm_encoder_task;
use crate::tasks::encoder::wheel_encoder_task;
use crate::tasks::logger::usb_logger_task;

// Library
use defmt_rtt as _;
use panic_probe as _;

use dc_robot::HBridge;
use dc_robot::Indicators;
use embassy_rp::adc;
use embassy_rp::adc::Adc;
use embassy_rp::gpio::Input;
use embassy_rp::gpio::Level;
use embassy_rp::gpio::Output;
use embassy_rp::gpio::Pull;
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::rotary_encoder::PioEncoder;
use embassy_rp::pio_programs::rotary_encoder::PioEncoderProgram;
use embassy_rp::pwm;
use embassy_rp::pwm::Pwm;
use embassy_rp::usb::Driver;
use embassy_executor::Spawner;

/* --------------------------- Board -------------------------- */
fn pwm_config() -> pwm::Config {
    let mut config = pwm::Config::default();
    config.top = PWM_PERIOD_TICKS;
    config
}

fn indicators(r: IndicatorResources) -> Indicators<Output<'static>> {
    Indicators::new(
        Output::new(r.HEARTBEAT_LED_PIN, Level::Low),
        Output::new(r.STATUS_LED_PIN, Level::Low),
        Output::new(r.MOTOR_ENABLE_PIN, Level::Low),
    )
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let ph = embassy_rp::init(Default::default());
    let p = split_resources!(ph);

    spawner.must_spawn(usb_logger_task(Driver::new(ph.USB, Irqs)));

    let WheelResources {
        PWM_CW_PIN: wheel_cw,
        PWM_CCW_PIN: wheel_ccw,
        ENCODER_PIN_A: wheel_a,
        ENCODER_PIN_B: wheel_b,
        SLICE: wheel_slice,
    } = p.wheel;

    let ArmResources {
        PWM_CW_PIN: arm_cw,
        PWM_CCW_PIN: arm_ccw,
        ENCODER_PIN_A: arm_a,
        ENCODER_PIN_B: arm_b,
        SLICE: arm_slice,
    } = p.arm;

    let Pio {
        mut common, sm0, sm1, ..
    } = Pio::new(ph.PIO0, Irqs);

    let enc_prg = PioEncoderProgram::new(&mut common);
    let wheel_encoder = RotaryEncoder::new(
        PioEncoder::new(&mut common, sm0, wheel_a, wheel_b, &enc_prg),
        &WHEEL_COUNT,
    );
    let arm_encoder = RotaryEncoder::new(
        PioEncoder::new(&mut common, sm1, arm_a, arm_b, &enc_prg),
        &ARM_COUNT,
    );

    // Channel A is CCW, channel B is CW
    let (Some(wheel_pwm_ccw), Some(wheel_pwm_cw)) =
        Pwm::new_output_ab(wheel_slice, wheel_ccw, wheel_cw, pwm_config()).split()
    else {
        defmt::panic!("wheel pwm outputs unavailable");
    };
    let (Some(arm_pwm_ccw), Some(arm_pwm_cw)) =
        Pwm::new_output_ab(arm_slice, arm_ccw, arm_cw, pwm_config()).split()
    else {
        defmt::panic!("arm pwm outputs unavailable");
    };

    let wheel: Motor = HBridge::new(wheel_pwm_cw, wheel_pwm_ccw);
    let arm: Motor = HBridge::new(arm_pwm_cw, arm_pwm_ccw);

    let robot = match build_robot(wheel, arm) {
        Ok(robot) => robot,
        Err(err) => defmt::panic!("robot setup failed: {}", err),
    };

    let InputResources {
        BUTTON_PIN,
        SENSOR_GATE_PIN,
        IR_PIN,
    } = p.inputs;

    let board = Board::new(
        indicators(p.indicators),
        Input::new(SENSOR_GATE_PIN, Pull::Up),
        Adc::new(ph.ADC, Irqs, adc::Config::default()),
        adc::Channel::new_pin(IR_PIN, Pull::None),
    );

    spawner.must_spawn(wheel_encoder_task(wheel_encoder));
    spawner.must_spawn(arm_encoder_task(arm_encoder));
    spawner.must_spawn(button_task(Input::new(BUTTON_PIN, Pull::Up)));
    spawner.must_spawn(control_loop_task(robot, board));
}
