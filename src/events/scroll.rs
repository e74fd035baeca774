use drift_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Record the scroll delta between consecutive scroll events.
///
/// Must be registered before listeners that read `input.scroll`; the browser
/// calls listeners for one event in registration order.
pub fn wire_scroll_sampler(window: &web::Window, input: Rc<RefCell<InputState>>) {
    if let Ok(y) = window.scroll_y() {
        input.borrow_mut().scroll.last_offset = y;
    }
    let wnd = window.clone();
    crate::dom::add_window_listener(window, "scroll", move || {
        if let Ok(y) = wnd.scroll_y() {
            input.borrow_mut().on_scroll(y);
        }
    });
}
