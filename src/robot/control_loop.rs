/*
    Control Loop

    One tick of the robot: take a pending reset, run the active mission
    stage, update every drive, toggle the heartbeat. Timing is left to the
    caller, see `scheduler`.
*/

use heapless::Vec;

use super::Action;
use super::ButtonEvent;
use super::Condition;
use super::Mission;
use super::MotorId;
use super::MotorReport;
use super::RobotState;
use super::RunMode;
use super::Telemetry;
use crate::config::MAX_MOTORS;
use crate::control::ControlMode;
use crate::control::Drive;
use crate::control::TargetStatus;
use crate::error::SetupError;
use crate::resources::Actuator;
use crate::resources::PulseCounter;
use embassy_time::Instant;

/* --------------------------- IO -------------------------- */
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorInputs {
    /// IR reading in mV, `None` when the sensor was not sampled this tick.
    pub distance_mv: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outputs {
    pub heartbeat: bool,
    pub status: bool,
    pub motors_enabled: bool,
}

/* --------------------------- Code -------------------------- */
pub struct ControlLoop<A, E> {
    mission: &'static Mission,
    drives: Vec<Drive<A, E>, MAX_MOTORS>,
    mode: RunMode,
    state: RobotState,
    stage_entered: bool,
    fired_triggers: u32,
    distance_mv: f32,
    outputs: Outputs,
    ticks: u32,
}

impl<A: Actuator, E: PulseCounter> ControlLoop<A, E> {
    pub fn new<I>(mission: &'static Mission, drives: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = Drive<A, E>>,
    {
        let mut slots = Vec::new();
        for drive in drives {
            slots.push(drive).map_err(|_| SetupError::TooManyMotors)?;
        }

        let modes: Vec<ControlMode, MAX_MOTORS> = slots.iter().map(Drive::mode).collect();
        mission.validate(&modes)?;

        Ok(Self {
            mission,
            drives: slots,
            mode: RunMode::new(),
            state: RobotState::Init,
            stage_entered: false,
            fired_triggers: 0,
            distance_mv: 0.0,
            outputs: Outputs::default(),
            ticks: 0,
        })
    }

    pub fn handle_button(&mut self, event: ButtonEvent) {
        self.mode.handle(event);
        log::info!("button {:?}, active {}", event, self.mode.is_active());
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    pub fn tick(&mut self, inputs: SensorInputs, now: Instant) -> Outputs {
        self.ticks = self.ticks.wrapping_add(1);

        if self.mode.take_reset() {
            self.reset(now);
        }

        self.outputs.status = self.mode.is_active();
        if self.outputs.status {
            if let Some(distance_mv) = inputs.distance_mv {
                self.distance_mv = distance_mv;
            }
            self.run_stage();
        }

        for drive in self.drives.iter_mut() {
            drive.update(now);
        }

        self.outputs.heartbeat = !self.outputs.heartbeat;
        self.outputs
    }

    fn reset(&mut self, now: Instant) {
        log::info!("reset, mission {}", self.mission.name);

        self.distance_mv = 0.0;
        self.outputs.status = false;
        self.outputs.motors_enabled = false;
        for drive in self.drives.iter_mut() {
            drive.reset(now);
        }
        self.enter(RobotState::Init);
    }

    fn enter(&mut self, state: RobotState) {
        self.state = state;
        self.stage_entered = false;
        self.fired_triggers = 0;
    }

    fn run_stage(&mut self) {
        // A missing stage is rejected at construction, this only guards a
        // state reached some other way.
        let Some(stage) = self.mission.stage(self.state) else {
            return;
        };

        if !self.stage_entered {
            self.apply(stage.on_entry);
            self.stage_entered = true;
        }

        for (i, trigger) in stage.triggers.iter().enumerate() {
            let bit = 1u32 << i;
            if self.fired_triggers & bit == 0 && self.holds(&trigger.when) {
                self.apply(trigger.actions);
                self.fired_triggers |= bit;
            }
        }

        if let Some(exit) = stage.exits.iter().find(|exit| self.holds(&exit.when)) {
            self.apply(exit.actions);
            log::debug!("state {:?} -> {:?}", self.state, exit.next);
            self.enter(exit.next);
        }
    }

    fn holds(&self, condition: &Condition) -> bool {
        match *condition {
            Condition::Always => true,
            Condition::Reached { motor, tolerance } => match self.drives.get(motor.index()) {
                Some(Drive::Position(drive)) => drive.target_status(tolerance) != TargetStatus::Approaching,
                _ => false,
            },
            Condition::DistanceWithin { min_mv, max_mv } => {
                self.distance_mv >= min_mv && self.distance_mv < max_mv
            }
        }
    }

    fn apply(&mut self, actions: &[Action]) {
        for action in actions {
            self.apply_one(action);
        }
    }

    fn apply_one(&mut self, action: &Action) {
        if let Action::EnableMotors(enabled) = *action {
            self.outputs.motors_enabled = enabled;
            return;
        }

        let Some((motor, _)) = action.target() else {
            return;
        };

        match (*action, self.drives.get_mut(motor.index())) {
            (
                Action::Rotate { revolutions, max_velocity, max_acceleration, .. },
                Some(Drive::Position(drive)),
            ) => {
                drive.set_max_velocity(max_velocity);
                drive.set_max_acceleration(max_acceleration);
                drive.set_desired_rotation(revolutions);
            }
            (Action::Spin { speed, max_acceleration, .. }, Some(Drive::Speed(drive))) => {
                drive.set_max_acceleration(max_acceleration);
                drive.set_desired_speed(speed);
            }
            (Action::Power { voltage, .. }, Some(Drive::OpenLoop(drive))) => {
                drive.set_voltage(voltage);
            }
            (Action::Hold { .. }, Some(Drive::Position(drive))) => {
                drive.hold();
            }
            _ => {
                log::warn!("{:?} ignored by motor {:?}", action, motor);
            }
        }
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn distance_mv(&self) -> f32 {
        self.distance_mv
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn mission(&self) -> &'static Mission {
        self.mission
    }

    pub fn drive(&self, motor: MotorId) -> Option<&Drive<A, E>> {
        self.drives.get(motor.index())
    }

    pub fn telemetry(&self) -> Telemetry {
        let mut motors = Vec::new();
        for (drive, motor) in self.drives.iter().zip(MotorId::ALL) {
            // Both are bounded by MAX_MOTORS
            let _ = motors.push(MotorReport {
                motor,
                count: drive.count(),
                speed_rps: drive.speed_rps(),
                rotation: drive.rotation(),
            });
        }

        Telemetry {
            tick: self.ticks,
            state: self.state,
            distance_mv: self.distance_mv,
            motors,
        }
    }
}
