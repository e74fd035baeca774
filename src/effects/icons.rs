use crate::constants::SKILL_SELECTOR;
use crate::dom;
use drift_core::badge_for;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Apply icon badges to known skill labels; returns how many were badged.
/// Unknown labels are left untouched.
pub fn apply_skill_badges(document: &web::Document) -> usize {
    let mut applied = 0;
    for el in dom::query_all(document, SKILL_SELECTOR) {
        let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        if let Some(badge) = badge_for(&html.inner_text()) {
            let style = html.style();
            for (property, value) in badge.declarations() {
                _ = style.set_property(property, &value);
            }
            applied += 1;
        }
    }
    applied
}
