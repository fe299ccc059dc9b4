use super::FxWiring;
use crate::constants::HEADER;
use crate::dom;
use crate::frame;
use crate::scene::scroll::header_style;
use web_sys as web;

pub fn wire_scroll_handlers(w: &FxWiring, window: &web::Window, document: &web::Document) {
    let header = dom::query_one(document, HEADER);
    let w = w.clone();
    dom::listen(window, "scroll", move |_ev: web::Event| {
        let Some(window) = web::window() else {
            return;
        };
        w.updater.borrow_mut().set_scroll(dom::scroll_y(&window));

        let updater = w.updater.clone();
        let targets = w.targets.clone();
        let header = header.clone();
        frame::coalesce(&w.scroll_gate, move || {
            let updater = updater.borrow();
            updater.on_scroll_frame(&mut *targets.borrow_mut());
            if let Some(header) = &header {
                let style = header_style(updater.input().scroll, &updater.tuning().scroll);
                dom::set_style(header, "background", style.background);
                dom::set_style(header, "backdrop-filter", style.backdrop_filter);
                dom::set_style(header, "transform", &style.transform.to_css());
            }
        });
    });
}
