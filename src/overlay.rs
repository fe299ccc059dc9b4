use crate::constants::LOADING_FADE_MS;
use crate::dom;
use web_sys as web;

const LOADING_CLASS: &str = "loading";

#[inline]
fn loading_el(document: &web::Document) -> Option<web::Element> {
    document
        .query_selector(&format!(".{}", LOADING_CLASS))
        .ok()
        .flatten()
}

/// Appends the full-page loading overlay with its spinner.
pub fn show_loading(document: &web::Document) -> anyhow::Result<()> {
    if is_loading(document) {
        return Ok(());
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(LOADING_CLASS);
    el.set_inner_html("<div class=\"loading-spinner\"></div>");
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Fades the overlay out and removes it once the fade has run.
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = loading_el(document) {
        _ = el.set_attribute("style", "opacity: 0");
        dom::set_timeout(LOADING_FADE_MS, move || el.remove());
    }
}

#[inline]
pub fn is_loading(document: &web::Document) -> bool {
    loading_el(document).is_some()
}
