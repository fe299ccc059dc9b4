use crate::scene::FrameGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs `f` once on the next animation frame.
pub fn request_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Schedules `f` on the next animation frame unless one is already pending
/// for this gate. Input handlers call this on every event; only the first
/// event of a frame schedules work, and the work reads whatever input is
/// latest when the frame fires.
pub fn coalesce(gate: &Rc<RefCell<FrameGate>>, f: impl FnOnce() + 'static) {
    if !gate.borrow_mut().request() {
        return;
    }
    let gate = gate.clone();
    request_frame(move || {
        gate.borrow_mut().begin_frame();
        f();
    });
}

/// Calls `tick` on every animation frame for the lifetime of the page.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        if let (Some(w), Some(cb)) = (web::window(), slot_inner.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
