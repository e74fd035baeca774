//! Per-frame animation state.
//!
//! Virtual time advances by a fixed `TIME_STEP` per displayed frame, not by
//! wall-clock delta, so motion speed follows the display refresh rate. Time is
//! derived from the integer frame count, which keeps `time()` after `n` steps
//! equal to `n * TIME_STEP` with no accumulated rounding.

use crate::constants::{
    BREATH_AMPLITUDE, BREATH_FREQUENCY, CAMERA_BASE_Z, FIELD_SPIN_X, FIELD_SPIN_Y, TIME_STEP,
};
use crate::follow::CameraFollow;
use crate::input::InputState;
use glam::{Mat4, Vec2, Vec3};

/// Transform values produced by one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePose {
    pub frame: u64,
    pub time: f64,
    /// Euler angles (XYZ order) of the particle field.
    pub field_rotation: Vec3,
    pub camera_position: Vec3,
}

impl FramePose {
    pub fn field_model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            glam::EulerRot::XYZ,
            self.field_rotation.x,
            self.field_rotation.y,
            self.field_rotation.z,
        )
    }
}

pub struct Animator {
    frame: u64,
    field_rotation: Vec3,
    camera_position: Vec3,
    follow: CameraFollow,
}

impl Animator {
    pub fn new(follow: CameraFollow) -> Self {
        Self {
            frame: 0,
            field_rotation: Vec3::ZERO,
            camera_position: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            follow,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time(&self) -> f64 {
        self.frame as f64 * TIME_STEP
    }

    pub fn follow(&self) -> &CameraFollow {
        &self.follow
    }

    pub fn step(&mut self, input: &InputState) -> FramePose {
        self.frame += 1;
        let time = self.time();

        self.field_rotation.x = (time * FIELD_SPIN_X) as f32;
        self.field_rotation.y = (time * FIELD_SPIN_Y) as f32;

        self.camera_position.z = breathing_depth(time);
        let lateral = self.follow.lateral(
            Vec2::new(self.camera_position.x, self.camera_position.y),
            time,
            input.pointer,
        );
        self.camera_position.x = lateral.x;
        self.camera_position.y = lateral.y;

        self.pose()
    }

    pub fn pose(&self) -> FramePose {
        FramePose {
            frame: self.frame,
            time: self.time(),
            field_rotation: self.field_rotation,
            camera_position: self.camera_position,
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Animator::new(CameraFollow::default())
    }
}

/// Camera distance from the origin: a slow sinusoidal "breath" around the base.
#[inline]
pub fn breathing_depth(time: f64) -> f32 {
    (CAMERA_BASE_Z as f64 + (time * BREATH_FREQUENCY).sin() * BREATH_AMPLITUDE) as f32
}
