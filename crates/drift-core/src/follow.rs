use crate::config::FollowMode;
use crate::constants::{
    DRIFT_AMPLITUDE_X, DRIFT_AMPLITUDE_Y, DRIFT_FREQUENCY_X, DRIFT_FREQUENCY_Y, FOLLOW_GAIN_X,
    FOLLOW_GAIN_Y, FOLLOW_SMOOTHING,
};
use crate::input::PointerState;
use glam::Vec2;

/// Lateral (x/y) camera motion strategy.
///
/// `Pointer` is a first-order low-pass toward a pointer-derived target, so it
/// depends on the previous position. `Drift` is a pure function of time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraFollow {
    Pointer { smoothing: f32, gain: Vec2 },
    Drift { amplitude: Vec2, frequency: [f64; 2] },
}

impl CameraFollow {
    pub fn from_mode(mode: FollowMode) -> Self {
        match mode {
            FollowMode::Pointer => CameraFollow::Pointer {
                smoothing: FOLLOW_SMOOTHING,
                gain: Vec2::new(FOLLOW_GAIN_X, FOLLOW_GAIN_Y),
            },
            FollowMode::Drift => CameraFollow::Drift {
                amplitude: Vec2::new(DRIFT_AMPLITUDE_X, DRIFT_AMPLITUDE_Y),
                frequency: [DRIFT_FREQUENCY_X, DRIFT_FREQUENCY_Y],
            },
        }
    }

    pub fn mode(&self) -> FollowMode {
        match self {
            CameraFollow::Pointer { .. } => FollowMode::Pointer,
            CameraFollow::Drift { .. } => FollowMode::Drift,
        }
    }

    /// Next lateral position given the current one, virtual time and the
    /// latest pointer sample.
    pub fn lateral(&self, current: Vec2, time: f64, pointer: PointerState) -> Vec2 {
        match *self {
            CameraFollow::Pointer { smoothing, gain } => {
                // screen y grows downward, world y grows upward
                let target = Vec2::new(pointer.x * gain.x, -pointer.y * gain.y);
                current + (target - current) * smoothing
            }
            CameraFollow::Drift {
                amplitude,
                frequency,
            } => Vec2::new(
                (time * frequency[0]).sin() as f32 * amplitude.x,
                (time * frequency[1]).cos() as f32 * amplitude.y,
            ),
        }
    }
}

impl Default for CameraFollow {
    fn default() -> Self {
        CameraFollow::from_mode(FollowMode::default())
    }
}
