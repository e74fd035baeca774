pub mod animator;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod follow;
pub mod frame_loop;
pub mod hover;
pub mod icons;
pub mod input;
pub mod parallax;
pub mod reveal;

pub use animator::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use follow::*;
pub use frame_loop::*;
pub use hover::*;
pub use icons::*;
pub use input::*;
pub use parallax::*;
pub use reveal::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
