//! Cancellable per-frame loop.
//!
//! The browser drives `tick` from `requestAnimationFrame` and re-arms while it
//! returns `LoopControl::Continue`. `run` is the same loop pulled by an
//! injected `FrameScheduler`, which lets tests step frames deterministically.

use crate::animator::{Animator, FramePose};
use crate::input::InputState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Receives the pose of every frame and issues the draw.
pub trait RenderSink {
    fn render(&mut self, pose: &FramePose);
}

/// Blocks (or yields) until the next frame is due. Returns `false` once the
/// host stops delivering frames.
pub trait FrameScheduler {
    fn wait_frame(&mut self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Shared flag that stops the loop before its next frame.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Rc<Cell<bool>>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct FrameLoop {
    animator: Animator,
    input: Rc<RefCell<InputState>>,
    cancel: CancelHandle,
}

impl FrameLoop {
    pub fn new(animator: Animator, input: Rc<RefCell<InputState>>) -> Self {
        Self {
            animator,
            input,
            cancel: CancelHandle::default(),
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Advance one frame and hand the pose to `sink`.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> LoopControl {
        if self.cancel.is_cancelled() {
            return LoopControl::Stop;
        }
        let pose = {
            let input = self.input.borrow();
            self.animator.step(&input)
        };
        sink.render(&pose);
        if self.cancel.is_cancelled() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Run until cancelled or until the scheduler stops; returns frames rendered.
    pub fn run<F, S>(&mut self, scheduler: &mut F, sink: &mut S) -> u64
    where
        F: FrameScheduler + ?Sized,
        S: RenderSink + ?Sized,
    {
        let start = self.animator.frame();
        while scheduler.wait_frame() {
            if self.tick(sink) == LoopControl::Stop {
                break;
            }
        }
        let frames = self.animator.frame() - start;
        log::debug!("[loop] stopped after {} frames", frames);
        frames
    }
}
