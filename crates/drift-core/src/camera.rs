//! Camera and viewport types shared with the web frontend.
//!
//! These types avoid platform APIs so they can be exercised from host-side
//! tests. The camera never rotates: it sits on the +Z axis looking down -Z,
//! and only its position changes from frame to frame.

use crate::constants::{
    CAMERA_BASE_Z, CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, MAX_PIXEL_RATIO,
};
use glam::{Mat4, Vec3};

/// CSS-pixel viewport size plus the (capped) device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    /// Backing-store size in device pixels, never smaller than 1x1.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).floor() as u32;
        let h = (self.height * self.pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}

/// Right-handed perspective camera with a cached projection matrix.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    aspect: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(viewport: &Viewport) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            aspect: 1.0,
            projection: Mat4::IDENTITY,
        };
        camera.set_viewport(viewport);
        camera
    }

    /// Recompute aspect and projection for a new viewport.
    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World to view transform: the inverse of the camera's translation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
