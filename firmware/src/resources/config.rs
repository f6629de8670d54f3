/*
*  Default Firmware Config
*
*  M1 Wheels: 100:1 gearmotor, 2000 counts per wheel turn
*  M2 Arm:    488:1 gearmotor, 20 counts per motor turn
*/

use dc_robot::config::ARM_MOTOR_488_1;
use dc_robot::config::DRIVE_MOTOR_100_1;
use dc_robot::robot::missions;
use dc_robot::robot::Mission;
use dc_robot::ControlMode;
use dc_robot::MotorSetup;

pub const N_MOTOR: usize = 2;

/* --------------------------- Robot -------------------------- */
pub const MOTOR_SETUPS: [MotorSetup; N_MOTOR] = [
    MotorSetup { mode: ControlMode::Position, params: DRIVE_MOTOR_100_1 },
    MotorSetup { mode: ControlMode::Position, params: ARM_MOTOR_488_1 },
];

pub static MISSION: &Mission = &missions::CLIMB;

/* --------------------------- Motor PWM -------------------------- */
pub const PWM_PERIOD_TICKS: u16 = 4999; // 25kHz Period = (125_000_000 (Pico clock)/25_000(Frequency)) -1

/* --------------------------- Button -------------------------- */
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
pub const BUTTON_QUEUE_SIZE: usize = 4;

/* --------------------------- Logger -------------------------- */
pub const LOG_LINE_SIZE: usize = 256;
