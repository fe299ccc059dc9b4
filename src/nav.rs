use crate::constants::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn close_menu(menu: &web::Element, hamburger: &web::Element) {
    _ = menu.class_list().remove_1(ACTIVE_CLASS);
    _ = hamburger.class_list().remove_1(ACTIVE_CLASS);
}

/// Hamburger toggle, smooth in-page anchors and outside-click dismissal.
pub fn wire_navigation(document: &web::Document) {
    let (Ok(Some(hamburger)), Ok(Some(menu))) = (
        document.query_selector(HAMBURGER),
        document.query_selector(NAV_LINKS),
    ) else {
        log::info!("[nav] no menu found");
        return;
    };

    {
        let menu = menu.clone();
        let button = hamburger.clone();
        dom::add_click_listener(document, HAMBURGER, move |_ev| {
            _ = menu.class_list().toggle(ACTIVE_CLASS);
            _ = button.class_list().toggle(ACTIVE_CLASS);
        });
    }

    for anchor in dom::query_all(document, IN_PAGE_ANCHORS) {
        let menu = menu.clone();
        let hamburger = hamburger.clone();
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            // A bare "#" is not a valid selector; treat it as no target.
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            if menu.class_list().contains(ACTIVE_CLASS) {
                close_menu(&menu, &hamburger);
            }
        });
    }

    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let inside_nav = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(NAV).ok().flatten())
            .is_some();
        if !inside_nav && menu.class_list().contains(ACTIVE_CLASS) {
            close_menu(&menu, &hamburger);
        }
    });
}
