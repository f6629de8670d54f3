/*
    Robot State
*/

/* --------------------------- States -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RobotState {
    Init,
    Forward,
    Climb,
    Backward,
    Sleep,
}

/* --------------------------- Motors -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MotorId {
    M1 = 0,
    M2 = 1,
    M3 = 2,
}

impl MotorId {
    pub const ALL: [MotorId; 3] = [MotorId::M1, MotorId::M2, MotorId::M3];

    pub fn index(self) -> usize {
        self as usize
    }
}

/* --------------------------- Button -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
}

/// Run/stop toggle driven by button events. Starting a run always asks for
/// one reset, which the loop takes before doing anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunMode {
    active: bool,
    pending_reset: bool,
}

impl RunMode {
    pub const fn new() -> Self {
        Self {
            active: false,
            pending_reset: false,
        }
    }

    pub fn handle(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Pressed => {
                self.active = !self.active;
                if self.active {
                    self.pending_reset = true;
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_reset_pending(&self) -> bool {
        self.pending_reset
    }

    /// Returns true at most once per activation.
    pub fn take_reset(&mut self) -> bool {
        core::mem::take(&mut self.pending_reset)
    }
}
