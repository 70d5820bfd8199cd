pub mod script;
pub mod svg;

use glam::DVec2;
use trails_core::{Engine, FrameLoop, InputAdapter, ManualScheduler, PointerInput, Surface};

pub use script::PointerScript;
pub use svg::{StrokedPath, SvgSurface};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rendered: u64,
    pub requests: u64,
}

/// Drive `frames` scheduled ticks headlessly, moving the pointer along
/// `script` before each one. `blur` gives a frame range during which the
/// window is treated as unfocused.
pub fn run_session<S: Surface>(
    engine: &mut Engine,
    surface: &mut S,
    script: &PointerScript,
    frames: u64,
    blur: Option<std::ops::Range<u64>>,
) -> RunStats {
    let mut input = InputAdapter::new();
    let mut frame_loop = FrameLoop::new(ManualScheduler::new());
    frame_loop.start();

    for frame in 0..frames {
        let focused = blur.as_ref().map_or(true, |r| !r.contains(&frame));
        if focused {
            frame_loop.start();
        } else {
            frame_loop.stop();
        }

        let target: DVec2 = script.at(frame);
        input.handle(PointerInput::Move(target), engine);

        if frame_loop.scheduler_mut().take() {
            frame_loop.tick(engine, surface);
        }
    }

    RunStats {
        rendered: frame_loop.frames(),
        requests: frame_loop.scheduler().total(),
    }
}
