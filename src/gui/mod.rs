mod app;
mod catalog_view;
mod components;
mod overlay_view;
pub mod styles;

pub use app::HubApp;
