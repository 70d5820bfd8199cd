use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window focus resumes the frame loop, blur stops it.
pub fn wire_focus_handlers(window: &web::Window, ctx: Rc<RefCell<FrameContext>>) {
    let ctx_focus = ctx.clone();
    let on_focus = Closure::wrap(Box::new(move || {
        ctx_focus.borrow_mut().resume();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
    on_focus.forget();

    let on_blur = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().pause();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
    on_blur.forget();
}
