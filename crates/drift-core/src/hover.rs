/// A single playable audio clip. Implemented over `HtmlAudioElement` in the
/// web crate.
pub trait Clip {
    fn rewind(&mut self);
    fn play(&mut self);
}

/// Hover feedback sound. Every trigger restarts the same clip from the
/// beginning; overlapping hovers cut the previous playback short.
pub struct HoverSound<C> {
    clip: C,
    triggers: u64,
}

impl<C: Clip> HoverSound<C> {
    pub fn new(clip: C) -> Self {
        Self { clip, triggers: 0 }
    }

    pub fn trigger(&mut self) {
        self.clip.rewind();
        self.clip.play();
        self.triggers += 1;
    }

    pub fn triggers(&self) -> u64 {
        self.triggers
    }

    pub fn clip(&self) -> &C {
        &self.clip
    }
}
