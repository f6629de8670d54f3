/*
    Missions

    WHEELS: M1, position controlled drive wheels.
    ARM:    M2, position controlled climbing arm (negative is down).
*/

use super::Action;
use super::Condition;
use super::Exit;
use super::Mission;
use super::Stage;
use super::Trigger;
use crate::robot::MotorId;
use crate::robot::RobotState;

pub const WHEELS: MotorId = MotorId::M1;
pub const ARM: MotorId = MotorId::M2;

/* --------------------------- Tuning -------------------------- */
pub const STAIR_BAND_MIN_MV: f32 = 2000.0;
pub const STAIR_BAND_MAX_MV: f32 = 3000.0;

const WHEEL_TRAVEL_REV: f32 = 5.0;
const WHEEL_MAX_VELOCITY: f32 = 0.5;
const WHEEL_MAX_ACCELERATION: f32 = 0.5;
const WHEEL_TOLERANCE_REV: f32 = 0.02;

const ARM_START_REV: f32 = -0.05;
const ARM_CLIMB_REV: f32 = -0.3;
const ARM_PARK_REV: f32 = -0.2;
const ARM_MAX_VELOCITY: f32 = 0.1;
const ARM_MAX_ACCELERATION: f32 = 0.2;
const ARM_PARK_ACCELERATION: f32 = 0.1;
const ARM_TOLERANCE_REV: f32 = 0.005;

const STAIR_IN_RANGE: Condition = Condition::DistanceWithin {
    min_mv: STAIR_BAND_MIN_MV,
    max_mv: STAIR_BAND_MAX_MV,
};

const DRIVE_TO_STAIR: Action = Action::Rotate {
    motor: WHEELS,
    revolutions: WHEEL_TRAVEL_REV,
    max_velocity: WHEEL_MAX_VELOCITY,
    max_acceleration: WHEEL_MAX_ACCELERATION,
};

/* --------------------------- Climb -------------------------- */
/// Drive up to the stair, swing the arm down to lift the chassis, then park.
pub static CLIMB: Mission = Mission {
    name: "climb",
    stages: &[
        Stage {
            state: RobotState::Init,
            on_entry: &[
                Action::EnableMotors(true),
                Action::Rotate {
                    motor: ARM,
                    revolutions: ARM_START_REV,
                    max_velocity: ARM_MAX_VELOCITY,
                    max_acceleration: ARM_MAX_ACCELERATION,
                },
            ],
            triggers: &[],
            exits: &[Exit {
                when: Condition::Reached { motor: ARM, tolerance: ARM_TOLERANCE_REV },
                actions: &[],
                next: RobotState::Forward,
            }],
        },
        Stage {
            state: RobotState::Forward,
            on_entry: &[DRIVE_TO_STAIR],
            triggers: &[],
            exits: &[Exit { when: STAIR_IN_RANGE, actions: &[], next: RobotState::Climb }],
        },
        Stage {
            state: RobotState::Climb,
            on_entry: &[Action::Rotate {
                motor: ARM,
                revolutions: ARM_CLIMB_REV,
                max_velocity: ARM_MAX_VELOCITY,
                max_acceleration: ARM_MAX_ACCELERATION,
            }],
            triggers: &[],
            exits: &[Exit {
                when: Condition::Reached { motor: ARM, tolerance: ARM_TOLERANCE_REV },
                actions: &[Action::Hold { motor: ARM }],
                next: RobotState::Sleep,
            }],
        },
        Stage {
            state: RobotState::Sleep,
            on_entry: &[],
            triggers: &[Trigger {
                when: Condition::Reached { motor: WHEELS, tolerance: WHEEL_TOLERANCE_REV },
                actions: &[Action::Rotate {
                    motor: ARM,
                    revolutions: ARM_PARK_REV,
                    max_velocity: ARM_MAX_VELOCITY,
                    max_acceleration: ARM_PARK_ACCELERATION,
                }],
            }],
            exits: &[],
        },
    ],
};

/* --------------------------- Reverse -------------------------- */
/// Drive up to the stair, back off to the start line and switch off.
pub static REVERSE: Mission = Mission {
    name: "reverse",
    stages: &[
        Stage {
            state: RobotState::Init,
            on_entry: &[Action::EnableMotors(true)],
            triggers: &[],
            exits: &[Exit { when: Condition::Always, actions: &[], next: RobotState::Forward }],
        },
        Stage {
            state: RobotState::Forward,
            on_entry: &[DRIVE_TO_STAIR],
            triggers: &[],
            exits: &[Exit { when: STAIR_IN_RANGE, actions: &[], next: RobotState::Backward }],
        },
        Stage {
            state: RobotState::Backward,
            on_entry: &[Action::Rotate {
                motor: WHEELS,
                revolutions: 0.0,
                max_velocity: WHEEL_MAX_VELOCITY,
                max_acceleration: WHEEL_MAX_ACCELERATION,
            }],
            triggers: &[],
            exits: &[Exit {
                when: Condition::Reached { motor: WHEELS, tolerance: WHEEL_TOLERANCE_REV },
                actions: &[],
                next: RobotState::Sleep,
            }],
        },
        Stage {
            state: RobotState::Sleep,
            on_entry: &[Action::EnableMotors(false)],
            triggers: &[],
            exits: &[],
        },
    ],
};
