use drift_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the cursor as a normalised offset from the viewport centre.
pub fn wire_pointer_sampler(window: &web::Window, input: Rc<RefCell<InputState>>) {
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let vp = crate::dom::viewport(&wnd);
        input.borrow_mut().on_pointer_move(
            ev.client_x() as f64,
            ev.client_y() as f64,
            vp.width,
            vp.height,
        );
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
