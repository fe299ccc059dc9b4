use crate::constants::*;
use crate::dom;
use crate::scene::stagger_delay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Index of `el` among its parent's children when the parent is one of the
/// staggered grids.
fn grid_index(el: &web::Element) -> Option<usize> {
    let parent = el.parent_element()?;
    let classes = parent.class_list();
    if !STAGGERED_GRIDS.iter().any(|c| classes.contains(c)) {
        return None;
    }
    let children = parent.children();
    (0..children.length()).position(|i| children.item(i).as_ref() == Some(el))
}

fn on_visible(el: &web::Element) {
    _ = el.class_list().add_1(ACTIVE_CLASS);
    if let Some(index) = grid_index(el) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            dom::set_style(
                html,
                "animation-delay",
                &stagger_delay(index, REVEAL_STAGGER_SECS),
            );
        }
    }
}

/// Marks section content for reveal and activates it as it scrolls into view.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_visible(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_TARGETS);
    for el in &targets {
        _ = el.class_list().add_1("reveal");
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
