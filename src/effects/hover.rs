use crate::constants::HOVER_SELECTOR;
use crate::dom;
use drift_core::{Clip, HoverSound, HOVER_SOUND_URL, HOVER_VOLUME};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct AudioClip(web::HtmlAudioElement);

impl Clip for AudioClip {
    fn rewind(&mut self) {
        self.0.set_current_time(0.0);
    }

    fn play(&mut self) {
        // Autoplay policy and fetch failures reject the promise; nothing to do.
        match self.0.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[hover] play rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("[hover] play error: {:?}", e),
        }
    }
}

pub fn wire_hover_sound(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, HOVER_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }
    let audio = web::HtmlAudioElement::new_with_src(HOVER_SOUND_URL)
        .map_err(|e| anyhow::anyhow!("HtmlAudioElement: {:?}", e))?;
    audio.set_volume(HOVER_VOLUME);
    let sound = Rc::new(RefCell::new(HoverSound::new(AudioClip(audio))));

    for el in &targets {
        let sound = sound.clone();
        let closure = Closure::wrap(Box::new(move || {
            sound.borrow_mut().trigger();
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::debug!("[hover] {} targets", targets.len());
    Ok(())
}
