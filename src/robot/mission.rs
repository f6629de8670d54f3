/*
    Mission Table

    A mission is a list of stages, one per robot state. Each stage names the
    setpoints it applies on entry, one-shot triggers that fire while it is
    active, and the exits that lead to the next state. Stages are plain
    static data so several missions can share one control loop.
*/

use crate::control::ControlMode;
use crate::error::SetupError;
use crate::robot::MotorId;
use crate::robot::RobotState;

pub const MAX_TRIGGERS: usize = 32;

/* --------------------------- Actions -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    EnableMotors(bool),
    /// Position drive: target in revolutions with velocity (rev/s) and
    /// acceleration (rev/s²) ceilings.
    Rotate {
        motor: MotorId,
        revolutions: f32,
        max_velocity: f32,
        max_acceleration: f32,
    },
    /// Speed drive: target speed in rev/s with acceleration ceiling.
    Spin {
        motor: MotorId,
        speed: f32,
        max_acceleration: f32,
    },
    /// Open-loop drive: fixed voltage.
    Power { motor: MotorId, voltage: f32 },
    /// Position drive: stay where the shaft is.
    Hold { motor: MotorId },
}

impl Action {
    /// Motor this action drives and the mode that motor must be in.
    pub fn target(&self) -> Option<(MotorId, ControlMode)> {
        match *self {
            Action::EnableMotors(_) => None,
            Action::Rotate { motor, .. } => Some((motor, ControlMode::Position)),
            Action::Spin { motor, .. } => Some((motor, ControlMode::Speed)),
            Action::Power { motor, .. } => Some((motor, ControlMode::OpenLoop)),
            Action::Hold { motor } => Some((motor, ControlMode::Position)),
        }
    }
}

/* --------------------------- Conditions -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Condition {
    Always,
    /// Position drive reached (or went past) its target within `tolerance`
    /// revolutions.
    Reached { motor: MotorId, tolerance: f32 },
    /// Last IR reading in `[min_mv, max_mv)`.
    DistanceWithin { min_mv: f32, max_mv: f32 },
}

impl Condition {
    pub fn target(&self) -> Option<(MotorId, ControlMode)> {
        match *self {
            Condition::Reached { motor, .. } => Some((motor, ControlMode::Position)),
            _ => None,
        }
    }
}

/* --------------------------- Stages -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub when: Condition,
    pub actions: &'static [Action],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exit {
    pub when: Condition,
    pub actions: &'static [Action],
    pub next: RobotState,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    pub state: RobotState,
    pub on_entry: &'static [Action],
    pub triggers: &'static [Trigger],
    pub exits: &'static [Exit],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mission {
    pub name: &'static str,
    pub stages: &'static [Stage],
}

impl Mission {
    pub fn stage(&self, state: RobotState) -> Option<&'static Stage> {
        self.stages.iter().find(|stage| stage.state == state)
    }

    /// Checks the table against the drive modes, indexed by motor id.
    pub fn validate(&self, modes: &[ControlMode]) -> Result<(), SetupError> {
        if self.stage(RobotState::Init).is_none() {
            return Err(SetupError::MissingInitStage);
        }

        for (i, stage) in self.stages.iter().enumerate() {
            let state = stage.state;

            if self.stages[..i].iter().any(|other| other.state == state) {
                return Err(SetupError::DuplicateStage(state));
            }

            if stage.triggers.len() > MAX_TRIGGERS {
                return Err(SetupError::TooManyTriggers(state));
            }

            let actions = stage
                .on_entry
                .iter()
                .chain(stage.triggers.iter().flat_map(|trigger| trigger.actions.iter()))
                .chain(stage.exits.iter().flat_map(|exit| exit.actions.iter()));
            for action in actions {
                check_target(state, action.target(), modes)?;
            }

            let conditions = stage
                .triggers
                .iter()
                .map(|trigger| &trigger.when)
                .chain(stage.exits.iter().map(|exit| &exit.when));
            for condition in conditions {
                check_target(state, condition.target(), modes)?;
            }

            for exit in stage.exits {
                if self.stage(exit.next).is_none() {
                    return Err(SetupError::UnknownStage { from: state, to: exit.next });
                }
            }
        }

        Ok(())
    }
}

fn check_target(
    state: RobotState,
    target: Option<(MotorId, ControlMode)>,
    modes: &[ControlMode],
) -> Result<(), SetupError> {
    let Some((motor, expected)) = target else {
        return Ok(());
    };

    match modes.get(motor.index()) {
        None => Err(SetupError::UnknownMotor { state, motor }),
        Some(mode) if *mode != expected => Err(SetupError::ModeMismatch { state, motor, expected }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::missions;

    const TWO_POSITION: [ControlMode; 2] = [ControlMode::Position, ControlMode::Position];

    #[test]
    fn shipped_missions_validate() {
        assert_eq!(missions::CLIMB.validate(&TWO_POSITION), Ok(()));
        assert_eq!(missions::REVERSE.validate(&TWO_POSITION), Ok(()));
    }

    #[test]
    fn missing_init_is_rejected() {
        const STAGES: &[Stage] = &[Stage {
            state: RobotState::Forward,
            on_entry: &[],
            triggers: &[],
            exits: &[],
        }];
        let mission = Mission { name: "broken", stages: STAGES };
        assert_eq!(mission.validate(&TWO_POSITION), Err(SetupError::MissingInitStage));
    }

    #[test]
    fn exit_to_missing_stage_is_rejected() {
        const STAGES: &[Stage] = &[Stage {
            state: RobotState::Init,
            on_entry: &[],
            triggers: &[],
            exits: &[Exit { when: Condition::Always, actions: &[], next: RobotState::Climb }],
        }];
        let mission = Mission { name: "broken", stages: STAGES };
        assert_eq!(
            mission.validate(&TWO_POSITION),
            Err(SetupError::UnknownStage { from: RobotState::Init, to: RobotState::Climb })
        );
    }

    #[test]
    fn duplicate_stage_is_rejected() {
        const INIT: Stage = Stage { state: RobotState::Init, on_entry: &[], triggers: &[], exits: &[] };
        const STAGES: &[Stage] = &[INIT, INIT];
        let mission = Mission { name: "broken", stages: STAGES };
        assert_eq!(mission.validate(&TWO_POSITION), Err(SetupError::DuplicateStage(RobotState::Init)));
    }

    #[test]
    fn motor_wiring_is_checked() {
        const STAGES: &[Stage] = &[Stage {
            state: RobotState::Init,
            on_entry: &[Action::Spin { motor: MotorId::M1, speed: 0.5, max_acceleration: 1.0 }],
            triggers: &[],
            exits: &[Exit {
                when: Condition::Reached { motor: MotorId::M3, tolerance: 0.01 },
                actions: &[],
                next: RobotState::Init,
            }],
        }];
        let mission = Mission { name: "wiring", stages: STAGES };

        assert_eq!(
            mission.validate(&TWO_POSITION),
            Err(SetupError::ModeMismatch { state: RobotState::Init, motor: MotorId::M1, expected: ControlMode::Speed })
        );
        assert_eq!(
            mission.validate(&[ControlMode::Speed, ControlMode::Position]),
            Err(SetupError::UnknownMotor { state: RobotState::Init, motor: MotorId::M3 })
        );
        assert_eq!(
            mission.validate(&[ControlMode::Speed, ControlMode::OpenLoop, ControlMode::Position]),
            Ok(())
        );
    }
}
