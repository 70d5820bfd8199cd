//! Pointer input state machine.
//!
//! The first pointer event of a session sets the target and rebuilds the trail
//! set; after that the adapter is armed and events only move the target.

use crate::engine::Engine;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Mouse move or touch move (first touch point).
    Move(DVec2),
    /// Touch start with the number of active touches.
    TouchStart { position: DVec2, touches: u32 },
}

impl PointerInput {
    #[inline]
    pub fn position(&self) -> DVec2 {
        match *self {
            PointerInput::Move(p) => p,
            PointerInput::TouchStart { position, .. } => position,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPhase {
    #[default]
    Uninitialized,
    Armed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    SessionStarted,
    Moved,
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct InputAdapter {
    phase: InputPhase,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> InputPhase {
        self.phase
    }

    /// Go back to waiting for a first interaction.
    pub fn disarm(&mut self) {
        self.phase = InputPhase::Uninitialized;
    }

    pub fn handle(&mut self, input: PointerInput, engine: &mut Engine) -> InputOutcome {
        match (self.phase, input) {
            (InputPhase::Uninitialized, _) => {
                engine.set_target(input.position());
                engine.start_session();
                self.phase = InputPhase::Armed;
                log::info!("[input] session started");
                InputOutcome::SessionStarted
            }
            (InputPhase::Armed, PointerInput::Move(p)) => {
                engine.set_target(p);
                InputOutcome::Moved
            }
            (InputPhase::Armed, PointerInput::TouchStart { position, touches }) => {
                if touches == 1 {
                    engine.set_target(position);
                    InputOutcome::Moved
                } else {
                    log::trace!("[input] ignoring touchstart with {} touches", touches);
                    InputOutcome::Ignored
                }
            }
        }
    }
}
