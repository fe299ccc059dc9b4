use crate::constants::*;
use crate::dom;
use crate::scene::{Transform, TransformOp};
use web_sys as web;

/// Static lift applied while the pointer is over an element.
struct HoverLift {
    selector: &'static str,
    transform: Transform,
    shadow: Option<&'static str>,
}

fn lifts() -> [HoverLift; 3] {
    [
        HoverLift {
            selector: SKILL_ITEM,
            transform: Transform::identity()
                .then(TransformOp::TranslateY(-5.0))
                .then(TransformOp::Scale(1.1))
                .then(TransformOp::RotateZ(5.0)),
            shadow: Some(LIFT_SHADOW_SKILL),
        },
        HoverLift {
            selector: PROJECT_CARD,
            transform: Transform::identity()
                .then(TransformOp::TranslateY(-20.0))
                .then(TransformOp::RotateX(10.0))
                .then(TransformOp::RotateY(10.0))
                .then(TransformOp::Scale(1.02)),
            shadow: None,
        },
        HoverLift {
            selector: CONTACT_METHOD,
            transform: Transform::identity()
                .then(TransformOp::TranslateY(-10.0))
                .then(TransformOp::Scale(1.05)),
            shadow: Some(LIFT_SHADOW_CONTACT),
        },
    ]
}

pub fn wire_hover_lifts(document: &web::Document) {
    for lift in lifts() {
        let css = lift.transform.to_css();
        for el in dom::query_all(document, lift.selector) {
            let (enter_el, css) = (el.clone(), css.clone());
            let shadow = lift.shadow;
            dom::listen(&el, "mouseenter", move |_ev: web::MouseEvent| {
                dom::set_style(&enter_el, "transform", &css);
                if let Some(shadow) = shadow {
                    dom::set_style(&enter_el, "box-shadow", shadow);
                }
            });
            let leave_el = el.clone();
            dom::listen(&el, "mouseleave", move |_ev: web::MouseEvent| {
                dom::set_style(&leave_el, "transform", "");
                if shadow.is_some() {
                    dom::set_style(&leave_el, "box-shadow", "");
                }
            });
        }
    }
}
