use crate::frame::FrameContext;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::{InputOutcome, PointerInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn mouse_client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Page position of the first active touch.
#[inline]
fn first_touch_page_pos(ev: &web::TouchEvent) -> Option<DVec2> {
    ev.touches()
        .get(0)
        .map(|t| DVec2::new(t.page_x() as f64, t.page_y() as f64))
}

fn dispatch(ctx: &Rc<RefCell<FrameContext>>, input: PointerInput) {
    if ctx.borrow_mut().pointer(input) == InputOutcome::SessionStarted {
        log::info!(
            "[input] first interaction at ({:.0},{:.0})",
            input.position().x,
            input.position().y
        );
    }
}

fn non_passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    opts
}

/// Mouse and touch listeners on the document feeding the input adapter.
pub fn wire_pointer_handlers(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) {
    wire_mousemove(document, ctx.clone());
    wire_touchmove(document, ctx.clone());
    wire_touchstart(document, ctx);
}

fn wire_mousemove(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        dispatch(&ctx, PointerInput::Move(mouse_client_pos(&ev)));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(pos) = first_touch_page_pos(&ev) {
            dispatch(&ctx, PointerInput::Move(pos));
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // preventDefault on touchmove only takes effect on a non-passive listener.
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &non_passive(),
    );
    closure.forget();
}

fn wire_touchstart(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(position) = first_touch_page_pos(&ev) {
            dispatch(
                &ctx,
                PointerInput::TouchStart {
                    position,
                    touches: ev.touches().length(),
                },
            );
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}
