//! DOM decoration effects. Each is wired independently of the GPU scene, so
//! they keep working when WebGPU is unavailable.

mod hover;
mod icons;
mod parallax;
mod reveal;

use drift_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_all(window: &web::Window, document: &web::Document, input: Rc<RefCell<InputState>>) {
    if let Err(e) = reveal::wire_card_reveal(document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    parallax::wire_image_parallax(window, document, input);
    if let Err(e) = hover::wire_hover_sound(document) {
        log::warn!("[hover] disabled: {:?}", e);
    }
    let badged = icons::apply_skill_badges(document);
    log::info!("[effects] wired; {} skill badges", badged);
}
