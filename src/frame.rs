use crate::render;
use drift_core::{Camera, FrameLoop, FramePose, LoopControl, RenderSink};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws each pose: applies it to the camera and hands both to the GPU.
pub struct SceneSink<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<Camera>>,
    pub gpu: render::GpuState<'a>,
}

impl<'a> RenderSink for SceneSink<'a> {
    fn render(&mut self, pose: &FramePose) {
        let mut camera = self.camera.borrow_mut();
        camera.position = pose.camera_position;
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&camera, pose) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub struct FrameContext<'a> {
    pub frame_loop: FrameLoop,
    pub sink: SceneSink<'a>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) -> LoopControl {
        self.frame_loop.tick(&mut self.sink)
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &drift_core::ParticleField,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, field).await
}

/// Drive the frame loop from requestAnimationFrame, re-arming after every
/// frame until the loop is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() == LoopControl::Stop {
            log::info!("[loop] cancelled");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
