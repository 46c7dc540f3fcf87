//! The hyperspace jump sequencer.
//!
//! A long-running, cancellable sequence: ramp the jump-speed overlay up
//! over a fixed number of sub-ticks, hold it, ramp back down. Every
//! sub-tick re-checks clearance and the cancellation flags; any violation
//! aborts and zeroes the overlay. Overlay values are computed from the step
//! index, so the ramp-down lands on exactly zero with no residual drift.

use outrider_core::constants::{
    JUMP_CRUISE_STEPS, JUMP_MAX_OVERLAY, JUMP_RAMP_STEPS, JUMP_STEP_SECS,
};

/// Where the sequence is; step counts are sub-ticks completed in the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Idle,
    RampUp(u32),
    Cruise(u32),
    RampDown(u32),
}

/// Sub-tick outcome the orchestrator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEvent {
    /// Clearance lost or sequence cancelled; overlay reset to zero.
    Aborted,
    /// Ramp-down finished; hyperspace transition pending.
    Completed,
}

#[derive(Debug, Clone)]
pub struct JumpSequencer {
    phase: JumpPhase,
    overlay: f64,
    next_step_secs: f64,
    pending: bool,
}

impl Default for JumpSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpSequencer {
    pub fn new() -> Self {
        JumpSequencer {
            phase: JumpPhase::Idle,
            overlay: 0.0,
            next_step_secs: 0.0,
            pending: false,
        }
    }

    /// Current jump-speed overlay (units/s).
    pub fn overlay(&self) -> f64 {
        self.overlay
    }

    /// Anywhere past idle.
    pub fn engaged(&self) -> bool {
        self.phase != JumpPhase::Idle
    }

    /// Still accelerating (the abortable countdown window).
    pub fn countdown(&self) -> bool {
        matches!(self.phase, JumpPhase::RampUp(_))
    }

    /// Completed jump awaiting the external scene swap.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Try to engage. Refused while already mid-jump or without clearance;
    /// a refusal leaves the overlay at zero.
    pub fn start(&mut self, clear: bool, now: f64) -> bool {
        if self.engaged() || self.pending || !clear {
            return false;
        }
        self.phase = JumpPhase::RampUp(0);
        self.overlay = 0.0;
        self.next_step_secs = now + JUMP_STEP_SECS;
        true
    }

    /// Advance at the sub-tick cadence. `clear` is the mass-lock check
    /// result; `cancelled` folds in the shared stop flags.
    pub fn advance(&mut self, now: f64, clear: bool, cancelled: bool) -> Option<JumpEvent> {
        if !self.engaged() || now < self.next_step_secs {
            return None;
        }
        self.next_step_secs += JUMP_STEP_SECS;

        if cancelled || !clear {
            self.phase = JumpPhase::Idle;
            self.overlay = 0.0;
            return Some(JumpEvent::Aborted);
        }

        match self.phase {
            JumpPhase::Idle => None,
            JumpPhase::RampUp(step) => {
                let done = step + 1;
                self.overlay = JUMP_MAX_OVERLAY * done as f64 / JUMP_RAMP_STEPS as f64;
                self.phase = if done >= JUMP_RAMP_STEPS {
                    JumpPhase::Cruise(0)
                } else {
                    JumpPhase::RampUp(done)
                };
                None
            }
            JumpPhase::Cruise(step) => {
                let done = step + 1;
                self.overlay = JUMP_MAX_OVERLAY;
                self.phase = if done >= JUMP_CRUISE_STEPS {
                    JumpPhase::RampDown(0)
                } else {
                    JumpPhase::Cruise(done)
                };
                None
            }
            JumpPhase::RampDown(step) => {
                let done = step + 1;
                self.overlay =
                    JUMP_MAX_OVERLAY * (JUMP_RAMP_STEPS - done) as f64 / JUMP_RAMP_STEPS as f64;
                if done >= JUMP_RAMP_STEPS {
                    self.overlay = 0.0;
                    self.phase = JumpPhase::Idle;
                    self.pending = true;
                    Some(JumpEvent::Completed)
                } else {
                    self.phase = JumpPhase::RampDown(done);
                    None
                }
            }
        }
    }
}
