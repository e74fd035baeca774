use crate::constants::{REVEAL_RATIO_EPSILON, REVEAL_THRESHOLD};
use fnv::FnvHashSet;

/// Outcome of feeding one intersection sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Crossed the threshold for the first time.
    Revealed,
    /// Revealed earlier; stays revealed whatever the new sample says.
    AlreadyRevealed,
    Hidden,
}

/// One-way reveal state for observed cards, keyed by card index.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    revealed: FnvHashSet<usize>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: FnvHashSet::default(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, id: usize, intersecting: bool, ratio: f64) -> Visibility {
        if self.revealed.contains(&id) {
            return Visibility::AlreadyRevealed;
        }
        if intersecting && ratio + REVEAL_RATIO_EPSILON >= self.threshold {
            self.revealed.insert(id);
            Visibility::Revealed
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        RevealTracker::new(REVEAL_THRESHOLD)
    }
}
