use crate::constants::*;
use crate::dom;
use crate::scene::{ripple_at, ContactAction, RIPPLE_KEYFRAMES};
use glam::Vec2;
use web_sys as web;

/// Injects the ripple keyframes once per document.
pub fn install_ripple_style(document: &web::Document) -> anyhow::Result<()> {
    if document
        .query_selector("style[data-fx=\"ripple\"]")
        .ok()
        .flatten()
        .is_some()
    {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = style.set_attribute("data-fx", "ripple");
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Expanding circle from the click point inside `el`.
pub fn create_ripple(el: &web::HtmlElement, ev: &web::MouseEvent) {
    let Some(document) = el.owner_document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let click = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let ripple = ripple_at(click, &dom::rect_of(el));
    span.set_class_name("ripple");
    _ = span.set_attribute(
        "style",
        &format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px; position: absolute; \
             border-radius: 50%; background: {}; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none",
            ripple.left,
            ripple.top,
            RIPPLE_COLOR,
            size = ripple.size,
        ),
    );
    dom::set_style(el, "position", "relative");
    dom::set_style(el, "overflow", "hidden");
    if el.append_child(&span).is_ok() {
        dom::set_timeout(RIPPLE_MS, move || span.remove());
    }
}

fn dispatch(action: &ContactAction) {
    let (Some(href), Some(window)) = (action.href(), web::window()) else {
        return;
    };
    log::info!("[contact] open {}", href);
    if action.opens_new_tab() {
        _ = window.open_with_url_and_target(&href, "_blank");
    } else {
        _ = window.location().set_href(&href);
    }
}

/// Press feedback, link dispatch and ripple for every contact entry.
pub fn wire_contact_handlers(document: &web::Document) {
    for item in dom::query_all(document, CONTACT_ITEMS) {
        let el = item.clone();
        dom::listen(&item, "click", move |ev: web::MouseEvent| {
            let text = el.text_content().unwrap_or_default();

            dom::set_style(&el, "transform", "scale(0.95)");
            let pressed = el.clone();
            dom::set_timeout(CONTACT_PRESS_MS, move || {
                dom::set_style(&pressed, "transform", "")
            });

            dispatch(&ContactAction::classify(&text));
            create_ripple(&el, &ev);
        });
    }
}
