//! HueWheel Application
//!
//! The native application shell: window, GPU surface, pointer routing and
//! the preset bar around the color wheel.

mod app;
mod event_handler;
mod ui;

pub use app::{load_config, App, AppConfig};
pub use event_handler::PointerRouter;
pub use ui::{hsb_to_color32, render_ui, wheel_bounds, UiAction, UiState, PRESET_BAR_HEIGHT};
