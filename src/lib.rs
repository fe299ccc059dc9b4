#![cfg(target_arch = "wasm32")]
use crate::scene::{ParticleTuning, Tuning, TransformUpdater};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod debug;
mod dom;
mod events;
mod frame;
mod hover;
mod nav;
mod overlay;
mod reveal;
pub mod scene;
mod spawner;
mod targets;
mod text;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_effects(window: &web::Window, document: &web::Document) {
    let registry = targets::TargetRegistry::discover(document);
    let wiring = events::FxWiring::new(TransformUpdater::new(Tuning::default()), registry);

    events::wire_pointer_handlers(&wiring, document);
    events::wire_scroll_handlers(&wiring, window, document);

    // Page may have been reloaded mid-scroll; settle scroll-driven targets now.
    {
        let mut updater = wiring.updater.borrow_mut();
        updater.set_scroll(dom::scroll_y(window));
        updater.on_scroll_frame(&mut *wiring.targets.borrow_mut());
    }
}

/// Wires every page effect and lifts the loading screen. Effects are
/// cosmetic, so a step that fails is logged and the rest still run.
pub fn start_effects(window: &web::Window, document: &web::Document) {
    if let Err(e) = contact::install_ripple_style(document) {
        log::warn!("[contact] ripple style unavailable: {:?}", e);
    }
    nav::wire_navigation(document);
    spawner::start(document, ParticleTuning::default());
    wire_effects(window, document);
    hover::wire_hover_lifts(document);
    text::start_typing(document);
    if let Err(e) = reveal::wire_reveal(document) {
        log::warn!("[reveal] reveal-on-scroll disabled: {:?}", e);
    }
    contact::wire_contact_handlers(document);
    text::start_terminal(document);

    overlay::hide_loading(document);
    log::info!("[init] portfolio effects ready");
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::show_loading(&document)?;
    if let Err(e) = dom::sleep_ms(INIT_DELAY_MS).await {
        log::warn!("[init] start-up delay skipped: {:?}", e);
    }
    start_effects(&window, &document);

    if debug::is_enabled(&window) {
        if let Err(e) = debug::install(&document) {
            log::warn!("[debug] overlay unavailable: {:?}", e);
        }
    }
    Ok(())
}

// ---------------- Page-facing API ----------------

#[wasm_bindgen(js_name = createParticle)]
pub fn create_particle() {
    let Some(document) = dom::window_document() else {
        return;
    };
    if let Ok(Some(container)) = document.query_selector(PARTICLES_CONTAINER) {
        spawner::spawn_particle(&document, &container, &ParticleTuning::default());
    }
}

#[wasm_bindgen(js_name = showLoadingScreen)]
pub fn show_loading_screen() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or("no document")?;
    overlay::show_loading(&document).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = hideLoadingScreen)]
pub fn hide_loading_screen() {
    if let Some(document) = dom::window_document() {
        overlay::hide_loading(&document);
    }
}

#[wasm_bindgen(js_name = typeWriter)]
pub fn type_writer(element: web::HtmlElement, text: String, speed_ms: Option<u32>) {
    text::type_writer(element, &text, speed_ms.unwrap_or(TYPE_STEP_MS));
}
