use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::scene::FpsMeter;
use instant::Instant;
use web_sys as web;

const PANEL_STYLE: &str = "position: fixed; top: 10px; right: 10px; \
    background: rgba(0,0,0,0.8); color: white; padding: 10px; border-radius: 5px; \
    font-family: monospace; font-size: 12px; z-index: 10000;";

pub fn is_enabled(window: &web::Window) -> bool {
    window
        .location()
        .hash()
        .map(|h| h == DEBUG_HASH)
        .unwrap_or(false)
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Pointer position, live particle count and measured FPS in a corner panel.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    log::info!("[debug] debug overlay enabled");
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let panel = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = panel.set_attribute("style", PANEL_STYLE);
    panel.set_inner_html(
        "<div>Mouse: <span id=\"mouse-pos\">0, 0</span></div>\
         <div>Particles: <span id=\"particle-count\">0</span></div>\
         <div>FPS: <span id=\"fps\">60</span></div>",
    );
    body.append_child(&panel)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    {
        let doc = document.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            set_text(
                &doc,
                "mouse-pos",
                &format!("{}, {}", ev.client_x(), ev.client_y()),
            );
        });
    }

    {
        let doc = document.clone();
        dom::set_interval(DEBUG_REFRESH_MS, move || {
            let count = dom::query_all(&doc, PARTICLE).len();
            set_text(&doc, "particle-count", &count.to_string());
        });
    }

    let doc = document.clone();
    let mut meter = FpsMeter::default();
    let mut last = Instant::now();
    let mut last_shown = Instant::now();
    frame::start_loop(move || {
        let now = Instant::now();
        let fps = meter.tick(now - last);
        last = now;
        if (now - last_shown).as_millis() >= DEBUG_REFRESH_MS as u128 {
            set_text(&doc, "fps", &format!("{:.0}", fps));
            last_shown = now;
        }
    });
    Ok(())
}
