use crate::constants::CARD_IMAGE_SELECTOR;
use crate::dom;
use drift_core::{parallax_offset, translate_y, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Nudge card images vertically by the latest scroll delta.
pub fn wire_image_parallax(
    window: &web::Window,
    document: &web::Document,
    input: Rc<RefCell<InputState>>,
) {
    let document = document.clone();
    dom::add_window_listener(window, "scroll", move || {
        let delta = input.borrow().scroll.delta;
        let transform = translate_y(parallax_offset(delta));
        for img in dom::query_all(&document, CARD_IMAGE_SELECTOR) {
            dom::set_style(&img, "transform", &transform);
        }
    });
}
