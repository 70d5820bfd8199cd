use crate::canvas::CanvasSurface;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::{Engine, FrameLoop, FrameScheduler, InputAdapter, InputOutcome, PointerInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules the shared tick closure with `requestAnimationFrame`.
pub struct RafScheduler {
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> bool {
        let Some(w) = web::window() else {
            log::error!("[loop] no window; cannot schedule frame");
            return false;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            log::error!("[loop] tick closure not installed");
            return false;
        };
        let requested = w.request_animation_frame(cb.as_ref().unchecked_ref());
        match requested {
            Ok(_) => true,
            Err(e) => {
                log::error!("[loop] requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }
}

struct FpsMeter {
    since: Instant,
    frames: u32,
}

impl FpsMeter {
    fn new() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!("[loop] {:.1} fps", self.frames as f32 / elapsed);
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

/// Everything one tick needs, shared between the rAF closure and the DOM
/// event handlers.
pub struct FrameContext {
    pub engine: Engine,
    pub input: InputAdapter,
    pub frame_loop: FrameLoop<RafScheduler>,
    surface: CanvasSurface,
    fps: FpsMeter,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if self.frame_loop.tick(&mut self.engine, &mut self.surface) {
            self.fps.record();
        }
    }

    pub fn pointer(&mut self, input: PointerInput) -> InputOutcome {
        self.input.handle(input, &mut self.engine)
    }

    /// Focus gained.
    pub fn resume(&mut self) {
        if self.frame_loop.start() {
            // Don't count the paused stretch toward the next fps sample.
            self.fps = FpsMeter::new();
        }
    }

    /// Focus lost.
    pub fn pause(&mut self) {
        self.frame_loop.stop();
    }
}

/// Build the frame context around a rAF-driven loop and start it.
pub fn start_loop(engine: Engine, surface: CanvasSurface) -> Rc<RefCell<FrameContext>> {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let ctx = Rc::new(RefCell::new(FrameContext {
        engine,
        input: InputAdapter::new(),
        frame_loop: FrameLoop::new(RafScheduler { tick: tick.clone() }),
        surface,
        fps: FpsMeter::new(),
    }));

    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));

    ctx.borrow_mut().frame_loop.start();
    ctx
}
