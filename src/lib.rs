#![cfg(target_arch = "wasm32")]
use drift_core::{
    Animator, Camera, CameraFollow, FrameLoop, InputState, ParticleField, SceneConfig,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod render;

use constants::{CANVAS_ID, FOLLOW_ATTR, SEED_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Samplers first: later scroll listeners read the delta they record.
    let input = Rc::new(RefCell::new(InputState::default()));
    events::wire_pointer_sampler(&window, input.clone());
    events::wire_scroll_sampler(&window, input.clone());

    effects::wire_all(&window, &document, input.clone());

    spawn_local(async move {
        if let Err(e) = init_scene(window, document, input).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn read_config(canvas: &web::HtmlCanvasElement) -> anyhow::Result<SceneConfig> {
    let config = SceneConfig::default().with_attributes(
        canvas.get_attribute(FOLLOW_ATTR).as_deref(),
        canvas.get_attribute(SEED_ATTR).as_deref(),
    )?;
    config.validate()?;
    Ok(config)
}

async fn init_scene(
    window: web::Window,
    document: web::Document,
    input: Rc<RefCell<InputState>>,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = read_config(&canvas)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let field = ParticleField::generate(config.particle_count, config.field_extent, &mut rng)?;
    log::info!(
        "[scene] particles={} extent={} follow={} seed={:?}",
        field.len(),
        field.extent(),
        config.follow,
        config.seed
    );

    let viewport = dom::viewport(&window);
    dom::sync_canvas_to_viewport(&canvas, &viewport);
    let camera = Rc::new(RefCell::new(Camera::new(&viewport)));
    events::wire_resize(
        &window,
        events::ResizeWiring {
            canvas: canvas.clone(),
            camera: camera.clone(),
        },
    );

    let gpu = frame::init_gpu(&canvas, &field).await?;

    let animator = Animator::new(CameraFollow::from_mode(config.follow));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        frame_loop: FrameLoop::new(animator, input),
        sink: frame::SceneSink {
            canvas,
            camera,
            gpu,
        },
    }));
    frame::start_loop(frame_ctx);
    log::info!(
        "[scene] ready in {:.1} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}
