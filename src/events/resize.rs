use crate::dom;
use drift_core::Camera;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ResizeWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<Camera>>,
}

/// Keep camera aspect and canvas backing size in step with the viewport.
/// The GPU surface follows the canvas size on the next frame.
pub fn wire_resize(window: &web::Window, w: ResizeWiring) {
    let wnd = window.clone();
    dom::add_window_listener(window, "resize", move || {
        let vp = dom::viewport(&wnd);
        w.camera.borrow_mut().set_viewport(&vp);
        dom::sync_canvas_to_viewport(&w.canvas, &vp);
        log::debug!(
            "[resize] {}x{} css, ratio {:.2}, aspect {:.3}",
            vp.width,
            vp.height,
            vp.pixel_ratio,
            vp.aspect()
        );
    });
}
