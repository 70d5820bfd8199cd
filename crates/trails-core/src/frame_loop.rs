//! Cooperative per-frame loop with a stopped/running lifecycle.
//!
//! The loop never blocks or spawns; it asks an injected [`FrameScheduler`] for
//! the next tick and the host calls [`FrameLoop::tick`] when that frame comes.
//! Stopping only clears the running flag, so a tick that was already requested
//! still fires and then does nothing.

use crate::engine::Engine;
use crate::surface::Surface;

/// Host capability that arranges for one future call to `FrameLoop::tick`.
pub trait FrameScheduler {
    /// Returns false if the host could not schedule the frame.
    fn request_frame(&mut self) -> bool;
}

/// Scheduler that just counts requests, for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    outstanding: u32,
    total: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one outstanding request, if any.
    pub fn take(&mut self) -> bool {
        if self.outstanding == 0 {
            return false;
        }
        self.outstanding -= 1;
        true
    }

    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> bool {
        self.outstanding += 1;
        self.total += 1;
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

pub struct FrameLoop<S: FrameScheduler> {
    state: LoopState,
    // A request has been handed to the scheduler and its tick has not run yet.
    pending: bool,
    frames: u64,
    scheduler: S,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: LoopState::Stopped,
            pending: false,
            frames: 0,
            scheduler,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames rendered since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Enter `Running` and request a tick. No-op if already running.
    ///
    /// Also the "gained focus" transition. If a request from before the stop
    /// is still in flight it is reused instead of issuing a second one.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = LoopState::Running;
        if !self.pending {
            self.request();
        }
        log::info!("[loop] running (frame {})", self.frames);
        true
    }

    /// Enter `Stopped`; the loop will not reschedule itself.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = LoopState::Stopped;
            log::info!("[loop] stopped (frame {})", self.frames);
        }
    }

    /// Run one scheduled frame. Returns whether anything was rendered.
    pub fn tick<T: Surface + ?Sized>(&mut self, engine: &mut Engine, surface: &mut T) -> bool {
        self.pending = false;
        if !self.is_running() {
            return false;
        }
        engine.render_frame(surface);
        self.frames += 1;
        // Only once this frame's draw calls have all been issued.
        self.request();
        true
    }

    fn request(&mut self) {
        // A refused request leaves nothing in flight; the next start retries.
        self.pending = self.scheduler.request_frame();
    }
}
