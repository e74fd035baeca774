//! Latest-sample input state written by the pointer and scroll listeners.
//!
//! Both samplers overwrite; nothing is queued. The web glue keeps one
//! `InputState` behind `Rc<RefCell<_>>` and every handler runs to completion
//! on the browser's event loop, so a frame always sees a consistent snapshot.

/// Cursor offset from the viewport centre, each axis in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Normalise raw client coordinates against the viewport size.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: normalize_axis(client_x, width),
            y: normalize_axis(client_y, height),
        }
    }
}

#[inline]
fn normalize_axis(pos: f64, extent: f64) -> f32 {
    if extent > 0.0 && pos.is_finite() {
        (((pos / extent) - 0.5) * 2.0).clamp(-1.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Last scroll offset and the signed change since the previous scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub last_offset: f64,
    pub delta: f64,
}

impl ScrollState {
    /// Record a new offset and return the delta from the previous one.
    pub fn record(&mut self, offset: f64) -> f64 {
        self.delta = offset - self.last_offset;
        self.last_offset = offset;
        self.delta
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub pointer: PointerState,
    pub scroll: ScrollState,
}

impl InputState {
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.pointer = PointerState::from_client(client_x, client_y, width, height);
    }

    pub fn on_scroll(&mut self, offset: f64) -> f64 {
        self.scroll.record(offset)
    }
}
