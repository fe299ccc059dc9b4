use super::FxWiring;
use crate::dom;
use crate::frame;
use glam::Vec2;
use web_sys as web;

pub fn wire_pointer_handlers(w: &FxWiring, document: &web::Document) {
    wire_pointermove(w, document);
    wire_pointerleave(w, document);
}

fn wire_pointermove(w: &FxWiring, document: &web::Document) {
    let w = w.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        // Viewport is read per event so a resize never leaves a stale divisor.
        let viewport = dom::viewport_size(&window);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.updater.borrow_mut().set_pointer(client, viewport);

        let updater = w.updater.clone();
        let targets = w.targets.clone();
        frame::coalesce(&w.pointer_gate, move || {
            updater
                .borrow()
                .on_pointer_frame(&mut *targets.borrow_mut());
        });
    });
}

fn wire_pointerleave(w: &FxWiring, document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let w = w.clone();
    dom::listen(&root, "mouseleave", move |_ev: web::MouseEvent| {
        let mut updater = w.updater.borrow_mut();
        updater.pointer_left();
        updater.reset_cards(&mut *w.targets.borrow_mut());
        log::debug!("[fx] pointer left, cards reset");
    });
}
