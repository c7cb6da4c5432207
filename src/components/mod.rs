pub mod app;
pub mod avatar;
pub mod content_panel;
pub mod menu_view;
pub mod profile_card;

pub use app::App;
