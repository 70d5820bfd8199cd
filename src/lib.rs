#![cfg(target_arch = "wasm32")]
use trails_core::{Engine, HueConfig, TrailConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trails-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ELEMENT_ID)?;
    let ctx_2d = dom::context_2d(&canvas)?;
    dom::wire_canvas_resize(&canvas);

    let engine = Engine::new(TrailConfig::default(), HueConfig::default(), rand::random())?;
    let surface = canvas::CanvasSurface::new(canvas, ctx_2d);

    // Loop runs from here on; chains appear on the first pointer event.
    let frame_ctx = frame::start_loop(engine, surface);
    events::wire_pointer_handlers(&document, frame_ctx.clone());
    events::wire_focus_handlers(&window, frame_ctx);

    Ok(())
}
