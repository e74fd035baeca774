use crate::constants::{CARD_SELECTOR, REVEAL_CLASS, REVEAL_INDEX_ATTR};
use crate::dom;
use drift_core::{RevealTracker, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Add `show` to each card once it is sufficiently visible. Revealed cards are
/// unobserved; the class is never removed.
pub fn wire_card_reveal(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, CARD_SELECTOR);
    if cards.is_empty() {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    let threshold = tracker.borrow().threshold();

    let on_entries = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = target
                .get_attribute(REVEAL_INDEX_ATTR)
                .and_then(|s| s.parse::<usize>().ok())
            else {
                continue;
            };
            let seen = tracker.borrow_mut().observe(
                index,
                entry.is_intersecting(),
                entry.intersection_ratio(),
            );
            if seen == Visibility::Revealed {
                _ = target.class_list().add_1(REVEAL_CLASS);
                observer.unobserve(&target);
            }
        }
    };
    let closure = Closure::wrap(
        Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
    );

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = web::IntersectionObserver::new_with_options(
        closure.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    closure.forget();

    for (i, card) in cards.iter().enumerate() {
        _ = card.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
        observer.observe(card);
    }
    log::debug!("[reveal] observing {} cards", cards.len());
    Ok(())
}
