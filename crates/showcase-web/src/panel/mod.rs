//! Panel state and class composition, kept free of any rendering so the
//! behaviour can be tested without mounting a view.

mod hover;
mod latch;
mod layout;

pub use hover::{HoverState, PointerEvent};
pub use latch::{VisibilityLatch, latched_visibility};
pub use layout::{
    DecorativeVisual, Orientation, accent_dot_class, accent_square_class, content_reveal_class, device_class,
    glow_class, glow_filter, glow_hex, tile_ambient_class, tile_border_class, visual_reveal_class,
    visual_reveal_delay,
};
