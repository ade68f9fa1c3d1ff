//! HueWheel Core Library
//!
//! Platform-agnostic color model, geometry mapping and widget state for the
//! HueWheel color picker.

pub mod color;
pub mod config;
pub mod input;
pub mod mapper;
pub mod presets;
pub mod widget;

pub use color::{ColorParseError, Hsb};
pub use config::{ConfigError, HueWheelConfig};
pub use input::{MouseButton, PointerEvent};
pub use mapper::{
    angle_for_hue, color_for_point, hue_for_angle, point_for_color, WheelGeometry, CENTER_EPSILON,
};
pub use presets::{PresetSelector, DEFAULT_PRESETS};
pub use widget::{ColorWheel, HandleState, Interaction, ObserverId, Placement};
