pub mod menu;
pub mod viewport;

pub use menu::{Axis, MenuAction, MenuState, MenuVisual};
pub use viewport::Viewport;
