// Shared tuning constants for the particle background and the page effects.

// Particle field
pub const PARTICLE_COUNT: usize = 1800;
pub const FIELD_EXTENT: f32 = 320.0; // edge length of the cube positions are sampled from
pub const POINT_COLOR: [f32; 3] = [0x88 as f32 / 255.0, 1.0, 1.0]; // #88ffff
pub const POINT_SIZE: f32 = 0.9; // world units, attenuated by depth
pub const POINT_OPACITY: f32 = 0.75;

// Animation clock
pub const TIME_STEP: f64 = 0.0015; // virtual time added per displayed frame

// Field spin (radians per unit of virtual time)
pub const FIELD_SPIN_X: f64 = 0.3;
pub const FIELD_SPIN_Y: f64 = 0.6;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_BASE_Z: f32 = 30.0;
pub const BREATH_AMPLITUDE: f64 = 0.6;
pub const BREATH_FREQUENCY: f64 = 2.0;

// Pointer follow
pub const FOLLOW_SMOOTHING: f32 = 0.05; // fraction of the remaining distance covered per frame
pub const FOLLOW_GAIN_X: f32 = 1.4;
pub const FOLLOW_GAIN_Y: f32 = 1.2;

// Time drift (alternative to pointer follow)
pub const DRIFT_AMPLITUDE_X: f32 = 1.4;
pub const DRIFT_AMPLITUDE_Y: f32 = 1.2;
pub const DRIFT_FREQUENCY_X: f64 = 3.0;
pub const DRIFT_FREQUENCY_Y: f64 = 2.0;

// Output surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Page effects
pub const REVEAL_THRESHOLD: f64 = 0.2; // visible fraction that reveals a card
pub const REVEAL_RATIO_EPSILON: f64 = 1e-3; // observers report ratios rounded near the crossing
pub const PARALLAX_DAMPING: f64 = 0.12; // px of image shift per px of scroll delta
pub const HOVER_VOLUME: f64 = 0.15;
pub const HOVER_SOUND_URL: &str = "https://assets.mixkit.co/sfx/preview/mixkit-soft-click-1123.mp3";
