use crate::constants::*;
use crate::dom;
use crate::scene::{StepSequence, TypeStep, Typewriter, CURSOR_HTML};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Types `text` into `el` one character every `speed_ms`, then appends the
/// blinking cursor.
pub fn type_writer(el: web::HtmlElement, text: &str, speed_ms: u32) {
    el.set_inner_html("");
    let writer = Rc::new(RefCell::new(Typewriter::new(text, speed_ms)));
    type_step(el, writer);
}

fn type_step(el: web::HtmlElement, writer: Rc<RefCell<Typewriter>>) {
    let step = writer.borrow_mut().advance();
    match step {
        TypeStep::Char(_) => {
            el.set_text_content(Some(&writer.borrow().typed()));
            let delay = writer.borrow().step_delay_ms();
            dom::set_timeout(delay, move || type_step(el, writer));
        }
        TypeStep::Cursor => {
            _ = el.insert_adjacent_html("beforeend", CURSOR_HTML);
        }
        TypeStep::Done => {}
    }
}

/// Clears the hero subtitle and types it back after a short pause.
pub fn start_typing(document: &web::Document) {
    let Some(subtitle) = dom::query_one(document, TYPING_TEXT) else {
        return;
    };
    let text = subtitle.text_content().unwrap_or_default();
    subtitle.set_text_content(Some(""));
    dom::set_timeout(TYPE_START_DELAY_MS, move || {
        type_writer(subtitle, &text, TYPE_STEP_MS)
    });
}

/// Fades terminal lines in one after another, each briefly highlighted.
pub fn start_terminal(document: &web::Document) {
    let Ok(Some(body)) = document.query_selector(TERMINAL_BODY) else {
        return;
    };
    let lines = dom::query_all_in(&body, CODE_LINE);
    for line in &lines {
        dom::set_style(line, "opacity", "0");
        dom::set_style(line, "transform", "translateY(10px)");
    }

    let seq = StepSequence::new(lines.len(), TERMINAL_FIRST_LINE_MS, TERMINAL_LINE_STEP_MS);
    for (line, step) in lines.into_iter().zip(seq) {
        let at = seq.offset_ms(step.index);
        dom::set_timeout(at, move || {
            dom::set_style(&line, "transition", "opacity 0.3s ease, transform 0.3s ease");
            dom::set_style(&line, "opacity", "1");
            dom::set_style(&line, "transform", "translateY(0)");
            dom::set_style(&line, "border-left", "2px solid var(--neon-violet)");
            dom::set_timeout(TERMINAL_HIGHLIGHT_MS, move || {
                dom::set_style(&line, "border-left", "none");
            });
        });
    }
}
