pub mod pointer;
pub mod resize;
pub mod scroll;

pub use pointer::wire_pointer_sampler;
pub use resize::{wire_resize, ResizeWiring};
pub use scroll::wire_scroll_sampler;
